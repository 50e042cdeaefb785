// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::story::Story;
use async_trait::async_trait;
use thiserror::Error;

/// 页码类型
///
/// 标识上游分页资源中的一页，从1开始计数
pub type PageNumber = u32;

#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Upstream returned status {0}")]
    Status(u16),
    #[error("Timeout")]
    Timeout,
    #[error("Page {0} missing from cache after fetch")]
    PageMissing(PageNumber),
}

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page of the listing and parse it into stories
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Story>, SourceError>;

    /// Get the name of the source
    fn name(&self) -> &'static str;
}
