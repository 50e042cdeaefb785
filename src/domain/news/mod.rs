// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 新闻来源模块
///
/// 定义新闻页面来源的抽象接口和错误类型
pub mod source;
