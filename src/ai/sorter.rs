use log::debug;

use crate::ai::error::TransportError;
use crate::ai::openai_client::ChatBackend;
use crate::ai::prompt::PromptBuilder;
use crate::ai::response::ResponseExtractor;
use crate::config::{ModelTarget, TargetOverrides};

/// Prompt, ask, extract. Holds no state between calls besides its defaults.
pub struct BogoSorter<B> {
    backend: B,
    target: ModelTarget,
    prompts: PromptBuilder,
    extractor: ResponseExtractor,
}

impl<B: ChatBackend> BogoSorter<B> {
    pub fn new(backend: B, target: ModelTarget) -> Self {
        Self {
            backend,
            target,
            prompts: PromptBuilder::new(),
            extractor: ResponseExtractor::new(),
        }
    }

    pub fn target(&self) -> &ModelTarget {
        &self.target
    }

    pub async fn sort(&self, numbers: &[f64]) -> Result<String, TransportError> {
        self.sort_with(numbers, &TargetOverrides::default()).await
    }

    pub async fn sort_with(
        &self,
        numbers: &[f64],
        overrides: &TargetOverrides,
    ) -> Result<String, TransportError> {
        let target = self.target.with_overrides(overrides);
        let prompt = self.prompts.build_prompt(numbers);
        debug!("Asking {} to sort {} numbers", target.model, numbers.len());

        let reply = self.backend.invoke(&prompt, &target).await?;
        Ok(self.extractor.extract(reply.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::openai_client::RawReply;
    use crate::ai::response::SENTINEL;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedBackend {
        reply: RawReply,
        seen: Mutex<Vec<(String, ModelTarget)>>,
    }

    impl ScriptedBackend {
        fn replying(reply: Option<&str>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn invoke(
            &self,
            prompt: &str,
            target: &ModelTarget,
        ) -> Result<RawReply, TransportError> {
            self.seen
                .lock()
                .unwrap()
                .push((prompt.to_string(), target.clone()));
            Ok(self.reply.clone())
        }
    }

    fn default_target() -> ModelTarget {
        ModelTarget {
            model: "local-model".to_string(),
            api_url: "http://localhost:1234/v1".to_string(),
            api_key: "not-needed".to_string(),
        }
    }

    #[test]
    fn sorts_through_the_model() {
        let sorter = BogoSorter::new(
            ScriptedBackend::replying(Some("[1, 2, 3, 5, 8]")),
            default_target(),
        );
        let result = tokio_test::block_on(sorter.sort(&[5.0, 2.0, 8.0, 1.0, 3.0])).unwrap();

        assert_eq!(result, "The sorted list is [1, 2, 3, 5, 8]");
        let seen = sorter.backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].0.ends_with("[5, 2, 8, 1, 3]"));
    }

    #[test]
    fn empty_input_and_empty_list_reply() {
        let sorter = BogoSorter::new(ScriptedBackend::replying(Some("[]")), default_target());
        let result = tokio_test::block_on(sorter.sort(&[])).unwrap();
        assert_eq!(result, "The sorted list is []");
    }

    #[test]
    fn absent_reply_becomes_sentinel() {
        let sorter = BogoSorter::new(ScriptedBackend::replying(None), default_target());
        let result = tokio_test::block_on(sorter.sort(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(result, SENTINEL);
    }

    #[test]
    fn overrides_reach_the_backend() {
        let sorter = BogoSorter::new(ScriptedBackend::replying(Some("[1]")), default_target());
        let overrides = TargetOverrides {
            model: Some("custom-model".to_string()),
            api_url: Some("http://custom-url:8080/v1".to_string()),
            api_key: None,
        };
        tokio_test::block_on(sorter.sort_with(&[1.0], &overrides)).unwrap();

        let seen = sorter.backend.seen.lock().unwrap();
        assert_eq!(seen[0].1.model, "custom-model");
        assert_eq!(seen[0].1.api_url, "http://custom-url:8080/v1");
        assert_eq!(seen[0].1.api_key, "not-needed");
        assert_eq!(sorter.target(), &default_target());
    }
}
