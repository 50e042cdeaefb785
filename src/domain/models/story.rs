// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub title: String,
    pub points: u32,
    pub sent_by: String,
    pub published: String,
    pub comments: u32,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            title: "No title".to_string(),
            points: 0,
            sent_by: "anonymous".to_string(),
            published: "unknown".to_string(),
            comments: 0,
        }
    }
}

impl Story {
    pub fn new(
        title: String,
        points: u32,
        sent_by: String,
        published: String,
        comments: u32,
    ) -> Self {
        Self {
            title,
            points,
            sent_by,
            published,
            comments,
        }
    }
}
