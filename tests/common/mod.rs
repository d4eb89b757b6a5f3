//! Shared test doubles and helpers.

#![allow(dead_code, unused_imports)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pocketbar::catalog::{CatalogError, CatalogService, Drink};
use pocketbar::favorites::{FavoriteStore, StoreError};
use pocketbar::mvi::{StateObserver, ViewState};

pub fn drink(id: &str, name: &str) -> Drink {
    Drink {
        id: id.to_string(),
        name: name.to_string(),
        thumb: None,
        ingredients: Vec::new(),
        is_favorite: false,
    }
}

/// Next state from the observer, with a guard against hangs.
pub async fn next<S: ViewState>(observer: &mut StateObserver<S>) -> S {
    tokio::time::timeout(Duration::from_secs(30), observer.recv())
        .await
        .expect("timed out waiting for a state")
        .expect("engine dropped")
}

/// Scripted catalog with optional per-call latency and a call counter.
#[derive(Default)]
pub struct FakeCatalog {
    name_results: HashMap<String, Vec<Drink>>,
    base_results: HashMap<String, Vec<Drink>>,
    by_id: HashMap<String, Drink>,
    latency: Duration,
    fail_all: bool,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_result(mut self, query: &str, drinks: Vec<Drink>) -> Self {
        self.name_results.insert(query.to_string(), drinks);
        self
    }

    pub fn with_base_result(mut self, base: &str, drinks: Vec<Drink>) -> Self {
        self.base_results.insert(base.to_string(), drinks);
        self
    }

    pub fn with_drink(mut self, drink: Drink) -> Self {
        self.by_id.insert(drink.id.clone(), drink);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every call fails with a 503 after the latency.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn work(&self) -> Result<(), CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail_all {
            return Err(CatalogError::Status(503));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn find_by_id(&self, id: &str) -> Result<Drink, CatalogError> {
        self.work().await?;
        self.by_id
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    async fn find_by_name(&self, query: &str) -> Result<Vec<Drink>, CatalogError> {
        self.work().await?;
        Ok(self.name_results.get(query).cloned().unwrap_or_default())
    }

    async fn find_by_base(&self, base: &str) -> Result<Vec<Drink>, CatalogError> {
        self.work().await?;
        Ok(self.base_results.get(base).cloned().unwrap_or_default())
    }
}

/// Store whose mutations always fail, slowly enough that an optimistic
/// state update is observable before the failure lands.
pub struct BrokenStore;

impl BrokenStore {
    async fn fail(&self) -> Result<(), StoreError> {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Err(StoreError::Write(std::io::Error::other("disk full")))
    }
}

#[async_trait]
impl FavoriteStore for BrokenStore {
    async fn list_all(&self) -> Result<HashSet<String>, StoreError> {
        Ok(HashSet::new())
    }

    async fn add(&self, _id: &str) -> Result<(), StoreError> {
        self.fail().await
    }

    async fn remove(&self, _id: &str) -> Result<(), StoreError> {
        self.fail().await
    }
}
