use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{Suggestion, SuggestionRequest};
use crate::domain::suggestion::prompt::{build_instruction, suggestion_output_shape};
use crate::domain::suggestion::services::StructuredGeneratorService;
use crate::domain::suggestion::use_cases::generate::{
    GenerateSuggestionParams, GenerateSuggestionUseCase,
};

pub struct GenerateSuggestionUseCaseImpl {
    pub generator: Arc<dyn StructuredGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateSuggestionUseCase for GenerateSuggestionUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateSuggestionParams,
    ) -> Result<Suggestion, SuggestionError> {
        let request = SuggestionRequest::new(
            &params.sport,
            &params.general_location,
            &params.preferred_days,
            params.user_preferences.as_deref(),
        )
        .inspect_err(|err| {
            self.logger
                .warn(&format!("Rejected suggestion request: {:?}", err));
        })?;

        self.logger.info(&format!(
            "Requesting {} suggestion near {}",
            request.sport, request.general_location
        ));

        let instruction = build_instruction(&request);
        let output_shape = suggestion_output_shape();

        let raw = self
            .generator
            .generate(&instruction, &output_shape)
            .await
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Suggestion generation failed: {}", err));
            })?;

        let suggestion = Suggestion::from_model_output(&raw).inspect_err(|_| {
            self.logger
                .error(&format!("Model answer does not match the suggestion shape: {}", raw));
        })?;

        self.logger.info(&format!(
            "Suggested {} at {}",
            suggestion.suggested_time, suggestion.suggested_location
        ));

        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::errors::ValidationIssue;
    use crate::domain::suggestion::prompt::OutputShape;
    use mockall::mock;
    use serde_json::{Value, json};

    mock! {
        pub Generator {}

        #[async_trait]
        impl StructuredGeneratorService for Generator {
            async fn generate(
                &self,
                instruction: &str,
                output_shape: &OutputShape,
            ) -> Result<Value, SuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(sport: &str, location: &str, days: &[&str], prefs: &str) -> GenerateSuggestionParams {
        GenerateSuggestionParams {
            sport: sport.to_string(),
            general_location: location.to_string(),
            preferred_days: days.iter().map(|d| d.to_string()).collect(),
            user_preferences: Some(prefs.to_string()),
        }
    }

    fn mitchell_park_answer() -> Value {
        json!({
            "suggestedTime": "6:00 PM",
            "suggestedLocation": "Mitchell Park courts",
            "reasoning": "Evening slots are less crowded.",
        })
    }

    #[tokio::test]
    async fn should_return_model_answer_unmodified() {
        let mut mock_generator = MockGenerator::new();
        mock_generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok(mitchell_park_answer()));

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "Tennis",
                "Mitchell Park",
                &["Monday", "Wednesday"],
                "beginner-friendly",
            ))
            .await;

        assert_eq!(
            result.unwrap(),
            Suggestion {
                suggested_time: "6:00 PM".to_string(),
                suggested_location: "Mitchell Park courts".to_string(),
                reasoning: "Evening slots are less crowded.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_send_interpolated_instruction_and_output_shape() {
        let mut mock_generator = MockGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|instruction, shape| {
                instruction.contains("Sport: Tennis")
                    && instruction.contains("Preferred Days: Monday, Wednesday\n")
                    && instruction.contains("User Preferences: beginner-friendly")
                    && *shape == suggestion_output_shape()
            })
            .times(1)
            .returning(|_, _| Ok(mitchell_park_answer()));

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(
                "Tennis",
                "Mitchell Park",
                &["Monday", "Wednesday"],
                "beginner-friendly",
            ))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_non_empty_fields_for_valid_request() {
        let mut mock_generator = MockGenerator::new();
        mock_generator.expect_generate().returning(|_, _| {
            Ok(json!({
                "suggestedTime": "Saturday 10:00 AM",
                "suggestedLocation": "Golden Gate Park basketball courts",
                "reasoning": "Morning games avoid the afternoon crowd.",
            }))
        });

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let suggestion = use_case
            .execute(params("Basketball", "Golden Gate Park", &["Saturday"], ""))
            .await
            .unwrap();

        assert!(!suggestion.suggested_time.is_empty());
        assert!(!suggestion.suggested_location.is_empty());
        assert!(!suggestion.reasoning.is_empty());
    }

    #[tokio::test]
    async fn should_reject_unsupported_sport_without_calling_model() {
        let mut mock_generator = MockGenerator::new();
        mock_generator.expect_generate().never();

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Rugby", "Golden Gate Park", &["Saturday"], ""))
            .await;

        match result {
            Err(SuggestionError::Validation(issues)) => {
                assert_eq!(
                    issues,
                    vec![ValidationIssue::UnsupportedSport("Rugby".to_string())]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_empty_days_without_calling_model() {
        let mut mock_generator = MockGenerator::new();
        mock_generator.expect_generate().never();

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Soccer", "Golden Gate Park", &[], ""))
            .await;

        assert!(matches!(result, Err(SuggestionError::Validation(_))));
    }

    #[tokio::test]
    async fn should_surface_generation_failure() {
        let mut mock_generator = MockGenerator::new();
        mock_generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Err(SuggestionError::GenerationFailed));

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Soccer", "Palo Alto", &["Sunday"], ""))
            .await;

        assert!(matches!(result, Err(SuggestionError::GenerationFailed)));
    }

    #[tokio::test]
    async fn should_reject_partial_model_answer() {
        let mut mock_generator = MockGenerator::new();
        mock_generator.expect_generate().returning(|_, _| {
            Ok(json!({
                "suggestedTime": "6:00 PM",
                "suggestedLocation": "",
                "reasoning": "Evening slots are less crowded.",
            }))
        });

        let use_case = GenerateSuggestionUseCaseImpl {
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params("Tennis", "Mitchell Park", &["Monday"], ""))
            .await;

        assert!(matches!(result, Err(SuggestionError::MalformedResponse)));
    }
}
