// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::models::story::Story;
use crate::domain::news::source::PageNumber;

/// 页面缓存
///
/// 以页码为键存储解析后的新闻条目序列，是系统中唯一的共享可变状态。
/// 条目一经写入即视为不可变，进程生命周期内不过期、不淘汰。
pub struct PageCache {
    pages: DashMap<PageNumber, Arc<Vec<Story>>>,
}

impl PageCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self {
            pages: DashMap::new(),
        }
    }

    /// 读取指定页的缓存条目
    pub fn get(&self, page: PageNumber) -> Option<Arc<Vec<Story>>> {
        self.pages.get(&page).map(|entry| Arc::clone(entry.value()))
    }

    /// 写入指定页的条目序列
    ///
    /// 若该页已有条目则保留原条目（先写者胜），
    /// 返回调用结束后缓存中实际存放的条目
    pub fn put(&self, page: PageNumber, records: Vec<Story>) -> Arc<Vec<Story>> {
        let entry = self.pages.entry(page).or_insert_with(|| Arc::new(records));
        Arc::clone(entry.value())
    }

    /// 计算给定页集合中尚未缓存的子集，保持给定顺序
    pub fn missing<I>(&self, pages: I) -> Vec<PageNumber>
    where
        I: IntoIterator<Item = PageNumber>,
    {
        pages
            .into_iter()
            .filter(|page| !self.pages.contains_key(page))
            .collect()
    }

    /// 当前已缓存的页数
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new()
    }
}
