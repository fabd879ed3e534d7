use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::responder::Category;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub category_usage: BTreeMap<String, u64>,
    pub total_messages: u64,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record(&self, category: Category) {
        let mut data = self.inner.write().await;
        *data
            .category_usage
            .entry(category.label().to_string())
            .or_insert(0) += 1;
        data.total_messages += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
