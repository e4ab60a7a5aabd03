use std::sync::Arc;

use futures_util::stream::BoxStream;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{EventStream, Json},
};

use business::domain::membership::use_cases::get_status::{
    GetMembershipStatusParams, GetMembershipStatusUseCase,
};
use business::domain::membership::use_cases::join::{JoinMatchParams, JoinMatchUseCase};
use business::domain::membership::use_cases::leave::{LeaveMatchParams, LeaveMatchUseCase};
use business::domain::shared::value_objects::MatchId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::membership::dto::{MembershipEventResponse, MembershipStatusResponse};
use crate::api::membership::events::MembershipEventBroadcaster;
use crate::api::tags::ApiTags;

pub struct MembershipApi {
    get_status_use_case: Arc<dyn GetMembershipStatusUseCase>,
    join_use_case: Arc<dyn JoinMatchUseCase>,
    leave_use_case: Arc<dyn LeaveMatchUseCase>,
    events: Arc<MembershipEventBroadcaster>,
}

impl MembershipApi {
    pub fn new(
        get_status_use_case: Arc<dyn GetMembershipStatusUseCase>,
        join_use_case: Arc<dyn JoinMatchUseCase>,
        leave_use_case: Arc<dyn LeaveMatchUseCase>,
        events: Arc<MembershipEventBroadcaster>,
    ) -> Self {
        Self {
            get_status_use_case,
            join_use_case,
            leave_use_case,
            events,
        }
    }
}

/// Membership API
///
/// Joining and leaving matches for the current session. Repeating a call is
/// never an error.
#[OpenApi]
impl MembershipApi {
    /// Membership status
    #[oai(
        path = "/matches/:id/membership",
        method = "get",
        tag = "ApiTags::Membership"
    )]
    async fn get_status(&self, id: Path<i64>) -> Json<MembershipStatusResponse> {
        let status = self
            .get_status_use_case
            .execute(GetMembershipStatusParams {
                match_id: MatchId::new(id.0),
            })
            .await;
        Json(status.into())
    }

    /// Join a match
    ///
    /// Joining a match twice keeps it joined. Ids missing from the catalog are
    /// ignored and come back without a notification.
    #[oai(
        path = "/matches/:id/membership",
        method = "post",
        tag = "ApiTags::Membership"
    )]
    async fn join_match(&self, id: Path<i64>) -> JoinMatchResponse {
        match self
            .join_use_case
            .execute(JoinMatchParams {
                match_id: MatchId::new(id.0),
            })
            .await
        {
            Ok(status) => JoinMatchResponse::Ok(Json(status.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                JoinMatchResponse::InternalError(json)
            }
        }
    }

    /// Leave a match
    #[oai(
        path = "/matches/:id/membership",
        method = "delete",
        tag = "ApiTags::Membership"
    )]
    async fn leave_match(&self, id: Path<i64>) -> Json<MembershipStatusResponse> {
        let status = self
            .leave_use_case
            .execute(LeaveMatchParams {
                match_id: MatchId::new(id.0),
            })
            .await;
        Json(status.into())
    }

    /// Membership events
    ///
    /// Server-sent events, one per join or leave call made after subscribing.
    #[oai(path = "/membership/events", method = "get", tag = "ApiTags::Membership")]
    async fn events(&self) -> EventStream<BoxStream<'static, MembershipEventResponse>> {
        EventStream::new(self.events.subscribe())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum JoinMatchResponse {
    #[oai(status = 200)]
    Ok(Json<MembershipStatusResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::IntoEndpoint;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use business::domain::matches::errors::MatchError;
    use business::domain::membership::model::{MembershipChange, MembershipStatus};

    mock! {
        pub GetStatus {}

        #[async_trait]
        impl GetMembershipStatusUseCase for GetStatus {
            async fn execute(&self, params: GetMembershipStatusParams) -> MembershipStatus;
        }
    }

    mock! {
        pub Join {}

        #[async_trait]
        impl JoinMatchUseCase for Join {
            async fn execute(&self, params: JoinMatchParams) -> Result<MembershipStatus, MatchError>;
        }
    }

    mock! {
        pub Leave {}

        #[async_trait]
        impl LeaveMatchUseCase for Leave {
            async fn execute(&self, params: LeaveMatchParams) -> MembershipStatus;
        }
    }

    fn client(
        get_status: MockGetStatus,
        join: MockJoin,
        leave: MockLeave,
    ) -> TestClient<impl poem::Endpoint> {
        let api = MembershipApi::new(
            Arc::new(get_status),
            Arc::new(join),
            Arc::new(leave),
            Arc::new(MembershipEventBroadcaster::new()),
        );
        TestClient::new(OpenApiService::new(api, "test", "1.0").into_endpoint())
    }

    #[tokio::test]
    async fn should_report_status_without_notification() {
        let mut get_status = MockGetStatus::new();
        get_status
            .expect_execute()
            .withf(|params| params.match_id == MatchId::new(4))
            .returning(|params| MembershipStatus {
                match_id: params.match_id,
                joined: true,
                change: None,
            });
        let cli = client(get_status, MockJoin::new(), MockLeave::new());

        let resp = cli.get("/matches/4/membership").send().await;

        resp.assert_status_is_ok();
        let body: serde_json::Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["joined"], true);
        assert!(body.get("notification").is_none());
    }

    #[tokio::test]
    async fn should_return_join_notification() {
        let mut join = MockJoin::new();
        join.expect_execute().times(1).returning(|params| {
            Ok(MembershipStatus {
                match_id: params.match_id,
                joined: true,
                change: Some(MembershipChange::Joined(params.match_id)),
            })
        });
        let cli = client(MockGetStatus::new(), join, MockLeave::new());

        let resp = cli.post("/matches/5/membership").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let notification = json.value().object().get("notification").object();
        notification.get("title").assert_string("Match Joined!");
        notification.get("severity").assert_string("default");
    }

    #[tokio::test]
    async fn should_return_destructive_notification_on_leave() {
        let mut leave = MockLeave::new();
        leave.expect_execute().times(1).returning(|params| MembershipStatus {
            match_id: params.match_id,
            joined: false,
            change: Some(MembershipChange::Left(params.match_id)),
        });
        let cli = client(MockGetStatus::new(), MockJoin::new(), leave);

        let resp = cli.delete("/matches/5/membership").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("joined").assert_bool(false);
        body.get("notification")
            .object()
            .get("severity")
            .assert_string("destructive");
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id() {
        let cli = client(MockGetStatus::new(), MockJoin::new(), MockLeave::new());

        let resp = cli.post("/matches/abc/membership").send().await;

        resp.assert_status(poem::http::StatusCode::BAD_REQUEST);
    }
}
