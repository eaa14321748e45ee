use std::sync::Arc;

use listing_editor::collaborators::{EditorContext, RecordingNavigator, ScriptedPrompt};
use listing_editor::editor::ValidationError;
use listing_editor::lifecycle::{EditorConfig, EditorSystem};
use listing_editor::model::{Category, ImageFilter, LocalFile, MapEvent, ProductId};
use listing_editor::sequencer::{SubmitError, SubmitOutcome};
use listing_editor::session::{EditorClient, SessionError};
use listing_editor::store::mock::{DataCall, MockDataStore, MockObjectStore};
use listing_editor::store::StoreError;

struct Mocks {
    data: MockDataStore,
    objects: MockObjectStore,
    prompt: ScriptedPrompt,
    navigator: RecordingNavigator,
}

impl Mocks {
    fn new() -> Self {
        Self {
            data: MockDataStore::new(),
            objects: MockObjectStore::new(),
            prompt: ScriptedPrompt::accepting(),
            navigator: RecordingNavigator::new(),
        }
    }

    fn context(&self, config: EditorConfig) -> EditorContext {
        EditorContext::new(
            Arc::new(self.data.clone()),
            Arc::new(self.objects.clone()),
            Arc::new(self.prompt.clone()),
            Arc::new(self.navigator.clone()),
        )
        .with_config(config)
    }

    fn fail_load(&self, id: &ProductId) {
        let down = StoreError::Transport("connection refused".into());
        self.data.expect_get_product(id.clone()).return_err(down.clone());
        self.data
            .expect_list_images(ImageFilter::ByProduct(id.clone()))
            .return_err(down);
    }
}

async fn fill(client: &EditorClient) {
    client.set_title("Book").await.unwrap();
    client.set_category(Some(Category::Literature)).await.unwrap();
    client.set_price("10000").await.unwrap();
    client.set_description("contents").await.unwrap();
    client
        .map_event(MapEvent::new(37.57, 126.98, "Seoul"))
        .await
        .unwrap();
    client
        .attach_files(vec![LocalFile::new("cover.jpg", vec![1, 2, 3])])
        .await
        .unwrap();
}

fn submit_error(err: &SessionError) -> &SubmitError {
    err.as_submit().expect("expected a submit error")
}

#[tokio::test]
async fn test_failed_load_still_allows_submit_by_default() {
    let mocks = Mocks::new();
    let id = ProductId::from("42");
    mocks.fail_load(&id);

    let system = EditorSystem::activate(id.clone(), mocks.context(EditorConfig::default()))
        .await
        .unwrap();
    assert!(!system.load_report.is_complete());
    fill(&system.client).await;

    mocks.data.expect_update_product(id.clone()).return_ok(());
    mocks.objects.expect_upload().return_ok(());
    mocks
        .data
        .expect_delete_images(ImageFilter::ByProduct(id.clone()))
        .return_ok(());
    mocks.data.expect_insert_images().return_ok(());

    assert_eq!(system.client.submit().await.unwrap(), SubmitOutcome::Completed);
    mocks.data.verify();
    mocks.objects.verify();
    assert_eq!(mocks.navigator.routes(), vec!["/"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_load_blocks_submit_when_configured() {
    let mocks = Mocks::new();
    let id = ProductId::from("42");
    mocks.fail_load(&id);

    let config = EditorConfig {
        block_submit_after_failed_load: true,
        ..EditorConfig::default()
    };
    let system = EditorSystem::activate(id, mocks.context(config)).await.unwrap();
    fill(&system.client).await;

    let err = system.client.submit().await.unwrap_err();
    assert_eq!(
        submit_error(&err),
        &SubmitError::Validation(ValidationError::LoadIncomplete)
    );
    assert_eq!(mocks.data.calls().len(), 2);
    assert!(mocks.objects.calls().is_empty());
    assert!(mocks.prompt.confirms().is_empty());
    assert_eq!(mocks.prompt.alerts().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_incomplete_form_is_rejected_without_remote_calls() {
    let mocks = Mocks::new();
    let id = ProductId::from("42");
    mocks.data.expect_get_product(id.clone()).return_ok(None);
    mocks
        .data
        .expect_list_images(ImageFilter::ByProduct(id.clone()))
        .return_ok(vec![]);

    let system = EditorSystem::activate(id, mocks.context(EditorConfig::default()))
        .await
        .unwrap();
    fill(&system.client).await;
    system.client.set_description("").await.unwrap();

    let err = system.client.submit().await.unwrap_err();
    match submit_error(&err) {
        SubmitError::Validation(ValidationError::MissingFields(fields)) => {
            assert_eq!(fields.len(), 1);
        }
        other => panic!("expected missing fields, got {other:?}"),
    }
    assert_eq!(mocks.data.calls().len(), 2);
    assert!(mocks.prompt.confirms().is_empty());

    // Fixing the field and resubmitting goes through.
    system.client.set_description("contents").await.unwrap();
    mocks
        .data
        .expect_update_product(ProductId::from("42"))
        .return_err(StoreError::Rejected("row level security".into()));
    let err = system.client.submit().await.unwrap_err();
    assert!(matches!(submit_error(&err), SubmitError::Update(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_write_failure_keeps_edits_for_retry() {
    let mocks = Mocks::new();
    let id = ProductId::from("42");
    mocks.data.expect_get_product(id.clone()).return_ok(None);
    mocks
        .data
        .expect_list_images(ImageFilter::ByProduct(id.clone()))
        .return_ok(vec![]);

    let system = EditorSystem::activate(id.clone(), mocks.context(EditorConfig::default()))
        .await
        .unwrap();
    fill(&system.client).await;

    mocks.data.expect_update_product(id.clone()).return_ok(());
    mocks
        .objects
        .expect_upload()
        .return_err(StoreError::Transport("reset".into()));

    let err = system.client.submit().await.unwrap_err();
    assert_eq!(
        submit_error(&err),
        &SubmitError::UploadCountMismatch {
            expected: 1,
            uploaded: 0
        }
    );

    let snapshot = system.client.snapshot().await.unwrap();
    assert_eq!(snapshot.title, "Book");
    assert_eq!(snapshot.pending_count, 1);
    assert!(mocks.navigator.routes().is_empty());

    // Retry: every step runs again from the top.
    mocks.data.expect_update_product(id.clone()).return_ok(());
    mocks.objects.expect_upload().return_ok(());
    mocks
        .data
        .expect_delete_images(ImageFilter::ByProduct(id.clone()))
        .return_ok(());
    mocks.data.expect_insert_images().return_ok(());

    assert_eq!(system.client.submit().await.unwrap(), SubmitOutcome::Completed);
    let updates = mocks
        .data
        .calls()
        .into_iter()
        .filter(|c| matches!(c, DataCall::UpdateProduct(..)))
        .count();
    assert_eq!(updates, 2);
    mocks.data.verify();

    system.shutdown().await.unwrap();
}
