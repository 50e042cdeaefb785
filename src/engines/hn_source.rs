// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::domain::models::story::Story;
use crate::domain::news::source::{PageNumber, PageSource, SourceError};
use crate::engines::story_parser::StoryParser;

/// Hacker News列表页来源
///
/// 通过HTTP抓取上游列表页并交给解析器提取新闻条目
pub struct HackerNewsSource {
    client: reqwest::Client,
    base_url: Url,
    parser: StoryParser,
}

impl HackerNewsSource {
    /// 创建新的页面来源
    ///
    /// # 参数
    ///
    /// * `base_url` - 上游站点的基础URL
    /// * `user_agent` - 请求使用的User-Agent
    /// * `timeout` - 单个HTTP请求的超时时间
    ///
    /// # 返回值
    ///
    /// * `Ok(HackerNewsSource)` - 构建完成的来源
    /// * `Err` - 基础URL非法或HTTP客户端构建失败
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            parser: StoryParser::new(),
        })
    }

    fn page_url(&self, page: PageNumber) -> Result<Url, SourceError> {
        self.base_url
            .join(&format!("news?p={}", page))
            .map_err(|e| SourceError::Transport(format!("Invalid page URL: {}", e)))
    }
}

#[async_trait]
impl PageSource for HackerNewsSource {
    /// 抓取并解析一页新闻列表
    ///
    /// # 参数
    ///
    /// * `page` - 要抓取的页码
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Story>)` - 按页面顺序排列的新闻条目
    /// * `Err(SourceError)` - 网络失败或上游返回非成功状态
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Story>, SourceError> {
        let url = self.page_url(page)?;
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SourceError::Transport(format!("Failed to read response body: {}", e)))?;

        let stories = self.parser.parse(&html);
        info!("Fetched page {} ({} stories)", page, stories.len());

        Ok(stories)
    }

    fn name(&self) -> &'static str {
        "hackernews"
    }
}
