use std::sync::Arc;

use fixtures::matches::repository::StaticMatchRepository;
use logger::{TracingLogger, TracingNotifier};
use openai::client::OpenAIClient;
use openai::suggestion_generator::SuggestionGeneratorOpenAI;

use business::application::matches::get_all::GetAllMatchesUseCaseImpl;
use business::application::matches::get_joined::GetJoinedMatchesUseCaseImpl;
use business::application::membership::get_status::GetMembershipStatusUseCaseImpl;
use business::application::membership::join::JoinMatchUseCaseImpl;
use business::application::membership::leave::LeaveMatchUseCaseImpl;
use business::application::membership::notifying_observer::NotifyingObserver;
use business::application::membership::store::SessionMembershipStore;
use business::application::suggestion::generate::GenerateSuggestionUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::membership::store::MembershipStore;

use crate::api::health::routes::HealthApi;
use crate::api::matches::routes::MatchApi;
use crate::api::membership::events::MembershipEventBroadcaster;
use crate::api::membership::routes::MembershipApi;
use crate::api::suggestion::routes::SuggestionApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub match_api: MatchApi,
    pub membership_api: MembershipApi,
    pub suggestion_api: SuggestionApi,
}

impl DependencyContainer {
    /// Wires one membership store for the whole process.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let match_repository = Arc::new(StaticMatchRepository::load(&config.fixtures.source)?);
        let health_api = HealthApi::new(match_repository.len());

        let openai_client = OpenAIClient::new(
            config.openai.api_key.clone(),
            config.openai.base_url.clone(),
            config.openai.model.clone(),
            config.openai.timeout,
        );
        let suggestion_generator = Arc::new(SuggestionGeneratorOpenAI::new(openai_client));

        // Membership store and its observers
        let store = Arc::new(SessionMembershipStore::new(logger.clone()));
        let events = Arc::new(MembershipEventBroadcaster::new());
        store.subscribe(Arc::new(NotifyingObserver::new(Arc::new(TracingNotifier))));
        store.subscribe(events.clone());

        // Match use cases
        let get_all_use_case = Arc::new(GetAllMatchesUseCaseImpl {
            repository: match_repository.clone(),
            logger: logger.clone(),
        });
        let get_joined_use_case = Arc::new(GetJoinedMatchesUseCaseImpl {
            repository: match_repository.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });

        // Membership use cases
        let get_status_use_case = Arc::new(GetMembershipStatusUseCaseImpl {
            store: store.clone(),
        });
        let join_use_case = Arc::new(JoinMatchUseCaseImpl {
            repository: match_repository,
            store: store.clone(),
            logger: logger.clone(),
        });
        let leave_use_case = Arc::new(LeaveMatchUseCaseImpl {
            store,
            logger: logger.clone(),
        });

        // Suggestion use cases
        let generate_use_case = Arc::new(GenerateSuggestionUseCaseImpl {
            generator: suggestion_generator,
            logger,
        });

        Ok(Self {
            health_api,
            match_api: MatchApi::new(get_all_use_case, get_joined_use_case),
            membership_api: MembershipApi::new(
                get_status_use_case,
                join_use_case,
                leave_use_case,
                events,
            ),
            suggestion_api: SuggestionApi::new(generate_use_case),
        })
    }
}
