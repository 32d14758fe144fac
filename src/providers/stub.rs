use super::ModelInvoker;

/// Stand-in backend: answers every prompt with a fixed line naming the model.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubProvider;

impl ModelInvoker for StubProvider {
    fn invoke(&self, model: &str, _prompt: &str) -> String {
        format!("fake response from {}", model)
    }
}
