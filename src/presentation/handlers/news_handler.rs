// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;

use crate::domain::models::story::Story;
use crate::infrastructure::news::aggregator::NewsAggregator;
use crate::presentation::errors::AppError;

/// 处理首页请求
///
/// 等价于请求第一页
///
/// # 参数
///
/// * `aggregator` - 新闻聚合器实例
///
/// # 返回值
///
/// 返回第一页新闻条目的JSON数组
///
/// # 错误
///
/// 上游抓取失败时返回错误响应
pub async fn get_front_page(
    Extension(aggregator): Extension<Arc<NewsAggregator>>,
) -> Result<Json<Vec<Story>>, AppError> {
    let stories = aggregator.resolve(1).await?;
    Ok(Json(stories))
}

/// 处理多页聚合请求
///
/// # 参数
///
/// * `aggregator` - 新闻聚合器实例
/// * `page_count` - 请求的页数，非正数按1处理
///
/// # 返回值
///
/// 返回第1..=page_count页新闻条目按页序拼接的JSON数组
///
/// # 错误
///
/// 任一缺失页抓取失败时返回错误响应
pub async fn get_news(
    Extension(aggregator): Extension<Arc<NewsAggregator>>,
    Path(page_count): Path<i64>,
) -> Result<Json<Vec<Story>>, AppError> {
    let page_count = page_count.clamp(1, i64::from(u32::MAX)) as u32;
    let stories = aggregator.resolve(page_count).await?;
    Ok(Json(stories))
}
