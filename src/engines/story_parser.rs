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

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::story::Story;

/// 新闻列表页解析器
///
/// 将上游列表页的HTML解析为新闻条目序列。
/// 缺失的子元素以字段级默认值补齐，解析过程永不失败。
pub struct StoryParser {
    story_sel: Selector,
    title_link_sel: Selector,
    titleline_sel: Selector,
    subtext_sel: Selector,
    score_sel: Selector,
    user_sel: Selector,
    age_sel: Selector,
    link_sel: Selector,
}

impl StoryParser {
    /// 创建解析器并预编译所有选择器
    pub fn new() -> Self {
        Self {
            story_sel: Selector::parse("tr.athing").expect("Invalid story selector"),
            title_link_sel: Selector::parse("a.titlelink").expect("Invalid title link selector"),
            titleline_sel: Selector::parse("span.titleline a").expect("Invalid titleline selector"),
            subtext_sel: Selector::parse("td.subtext").expect("Invalid subtext selector"),
            score_sel: Selector::parse("span.score").expect("Invalid score selector"),
            user_sel: Selector::parse("a.hnuser").expect("Invalid user selector"),
            age_sel: Selector::parse("span.age").expect("Invalid age selector"),
            link_sel: Selector::parse("a").expect("Invalid link selector"),
        }
    }

    /// 解析一页HTML
    ///
    /// # 参数
    ///
    /// * `html` - 列表页的原始HTML
    ///
    /// # 返回值
    ///
    /// 按页面出现顺序排列的新闻条目；没有条目的页面返回空序列
    pub fn parse(&self, html: &str) -> Vec<Story> {
        let document = Html::parse_document(html);
        let mut stories = Vec::new();

        for row in document.select(&self.story_sel) {
            let mut story = Story::default();

            // Old markup uses a.titlelink, current markup nests the link in span.titleline
            let title = row
                .select(&self.title_link_sel)
                .next()
                .or_else(|| row.select(&self.titleline_sel).next());
            if let Some(title) = title {
                story.title = title.text().collect::<String>().trim().to_string();
            }

            // Metadata lives in the row element following the story row
            if let Some(subtext) = self.subtext_for(&row) {
                if let Some(score) = subtext.select(&self.score_sel).next() {
                    story.points = leading_int(&score.text().collect::<String>());
                }
                if let Some(user) = subtext.select(&self.user_sel).next() {
                    story.sent_by = user.text().collect::<String>();
                }
                if let Some(age) = subtext.select(&self.age_sel).next() {
                    story.published = age.text().collect::<String>();
                }
                // The comments link is the last anchor; stories without
                // discussion show "discuss" instead
                if let Some(link) = subtext.select(&self.link_sel).last() {
                    let text = link.text().collect::<String>();
                    if text.contains("comment") {
                        story.comments = leading_int(&text);
                    }
                }
            }

            stories.push(story);
        }

        stories
    }

    fn subtext_for<'a>(&self, row: &ElementRef<'a>) -> Option<ElementRef<'a>> {
        let meta_row = row.next_siblings().find_map(ElementRef::wrap)?;
        meta_row.select(&self.subtext_sel).next()
    }
}

impl Default for StoryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析文本的首个空白分隔词元为整数，失败时返回0
fn leading_int(text: &str) -> u32 {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}
