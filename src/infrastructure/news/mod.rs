// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 新闻聚合模块
///
/// 提供分页新闻的并发抓取与聚合实现
pub mod aggregator;
