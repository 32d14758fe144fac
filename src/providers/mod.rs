pub mod stub;

pub use stub::StubProvider;

// 模型调用抽象；真实推理后端可替换 StubProvider
pub trait ModelInvoker: Send + Sync {
    fn invoke(&self, model: &str, prompt: &str) -> String;
}
