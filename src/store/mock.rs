//! # Mock Stores
//!
//! Expectation-driven fakes of [`DataStore`] and [`ObjectStore`] for testing the
//! sequencers without any real storage.
//!
//! Each mock holds a FIFO queue of expectations. Every call pops the next one,
//! checks that it is the same kind of request for the same key, and answers
//! with the scripted result. A call that finds no matching expectation panics,
//! so "this step must not run" is asserted simply by not scripting it. Every
//! call is also recorded and can be inspected with `calls()`.
//!
//! ```ignore
//! let data = MockDataStore::new();
//! data.expect_update_product(id.clone()).return_err(StoreError::Transport("down".into()));
//!
//! sequencer.submit(&ctx, &mut form).await.unwrap_err();
//!
//! data.verify(); // all scripted calls happened
//! assert_eq!(objects.calls().len(), 0);
//! ```
//!
//! This module is compiled unconditionally so integration tests under `tests/`
//! can use it.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::StoreError;
use super::traits::{DataStore, ObjectStore};
use crate::model::{ImageFilter, ProductId, ProductImageRow, ProductPatch, ProductRecord};

type Queue<E> = Arc<Mutex<VecDeque<E>>>;

/// Scripts the answer of one expected call.
pub struct ExpectationBuilder<R, E> {
    make: Box<dyn FnOnce(Result<R, StoreError>) -> E + Send>,
    queue: Queue<E>,
}

impl<R, E> ExpectationBuilder<R, E> {
    fn new(queue: Queue<E>, make: impl FnOnce(Result<R, StoreError>) -> E + Send + 'static) -> Self {
        Self {
            make: Box::new(make),
            queue,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.queue.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let expectation = (self.make)(Err(error));
        self.queue.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// DATA STORE
// =============================================================================

#[derive(Debug)]
pub enum DataExpectation {
    GetProduct {
        id: ProductId,
        response: Result<Option<ProductRecord>, StoreError>,
    },
    UpdateProduct {
        id: ProductId,
        response: Result<(), StoreError>,
    },
    ListImages {
        filter: ImageFilter,
        response: Result<Vec<ProductImageRow>, StoreError>,
    },
    DeleteImages {
        filter: ImageFilter,
        response: Result<(), StoreError>,
    },
    InsertImages {
        response: Result<(), StoreError>,
    },
}

/// A request observed by [`MockDataStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataCall {
    GetProduct(ProductId),
    UpdateProduct(ProductId, ProductPatch),
    ListImages(ImageFilter),
    DeleteImages(ImageFilter),
    InsertImages(Vec<ProductImageRow>),
}

#[derive(Clone, Default)]
pub struct MockDataStore {
    expectations: Queue<DataExpectation>,
    calls: Arc<Mutex<Vec<DataCall>>>,
}

impl MockDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_get_product(&self, id: ProductId) -> ExpectationBuilder<Option<ProductRecord>, DataExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            DataExpectation::GetProduct { id, response }
        })
    }

    pub fn expect_update_product(&self, id: ProductId) -> ExpectationBuilder<(), DataExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            DataExpectation::UpdateProduct { id, response }
        })
    }

    pub fn expect_list_images(&self, filter: ImageFilter) -> ExpectationBuilder<Vec<ProductImageRow>, DataExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            DataExpectation::ListImages { filter, response }
        })
    }

    pub fn expect_delete_images(&self, filter: ImageFilter) -> ExpectationBuilder<(), DataExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            DataExpectation::DeleteImages { filter, response }
        })
    }

    pub fn expect_insert_images(&self) -> ExpectationBuilder<(), DataExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            DataExpectation::InsertImages { response }
        })
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<DataCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining: {:?}", exps.len(), exps);
        }
    }

    fn next(&self, call: DataCall) -> DataExpectation {
        self.calls.lock().unwrap().push(call.clone());
        match self.expectations.lock().unwrap().pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected request: {call:?}"),
        }
    }
}

#[async_trait]
impl DataStore for MockDataStore {
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError> {
        match self.next(DataCall::GetProduct(id.clone())) {
            DataExpectation::GetProduct { id: expected, response } if &expected == id => response,
            other => panic!("Expectation mismatch: got get_product({id}), expected {other:?}"),
        }
    }

    async fn update_product(&self, id: &ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        match self.next(DataCall::UpdateProduct(id.clone(), patch)) {
            DataExpectation::UpdateProduct { id: expected, response } if &expected == id => response,
            other => panic!("Expectation mismatch: got update_product({id}), expected {other:?}"),
        }
    }

    async fn list_images(&self, filter: &ImageFilter) -> Result<Vec<ProductImageRow>, StoreError> {
        match self.next(DataCall::ListImages(filter.clone())) {
            DataExpectation::ListImages { filter: expected, response } if &expected == filter => response,
            other => panic!("Expectation mismatch: got list_images({filter:?}), expected {other:?}"),
        }
    }

    async fn delete_images(&self, filter: &ImageFilter) -> Result<(), StoreError> {
        match self.next(DataCall::DeleteImages(filter.clone())) {
            DataExpectation::DeleteImages { filter: expected, response } if &expected == filter => response,
            other => panic!("Expectation mismatch: got delete_images({filter:?}), expected {other:?}"),
        }
    }

    async fn insert_images(&self, rows: Vec<ProductImageRow>) -> Result<(), StoreError> {
        match self.next(DataCall::InsertImages(rows)) {
            DataExpectation::InsertImages { response } => response,
            other => panic!("Expectation mismatch: got insert_images, expected {other:?}"),
        }
    }
}

// =============================================================================
// OBJECT STORE
// =============================================================================

#[derive(Debug)]
pub struct UploadExpectation {
    response: Result<(), StoreError>,
}

/// An upload observed by [`MockObjectStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCall {
    pub bucket: String,
    pub path: String,
    pub bytes: usize,
}

pub const MOCK_PUBLIC_BASE: &str = "https://mock.storage/public";

#[derive(Clone, Default)]
pub struct MockObjectStore {
    expectations: Queue<UploadExpectation>,
    calls: Arc<Mutex<Vec<UploadCall>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one upload. Uploads consume expectations in the order they start.
    pub fn expect_upload(&self) -> ExpectationBuilder<(), UploadExpectation> {
        ExpectationBuilder::new(self.expectations.clone(), |response| UploadExpectation { response })
    }

    pub fn calls(&self) -> Vec<UploadCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn upload(&self, bucket: &str, path: &str, blob: Arc<[u8]>) -> Result<(), StoreError> {
        let call = UploadCall {
            bucket: bucket.to_string(),
            path: path.to_string(),
            bytes: blob.len(),
        };
        self.calls.lock().unwrap().push(call.clone());
        match self.expectations.lock().unwrap().pop_front() {
            Some(expectation) => expectation.response,
            None => panic!("Unexpected request: {call:?}"),
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{MOCK_PUBLIC_BASE}/{bucket}/{path}")
    }
}
