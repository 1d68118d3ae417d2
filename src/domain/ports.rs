use crate::domain::model::{BatchCards, BatchInput, OutgoingCard, RunSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn entries_file(&self) -> &str;
    fn emails_file(&self) -> &str;
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, card: &OutgoingCard) -> Result<()>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<BatchInput>;
    async fn transform(&self, input: BatchInput) -> Result<BatchCards>;
    async fn load(&self, cards: BatchCards) -> Result<RunSummary>;
}
