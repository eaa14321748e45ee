use std::sync::Arc;
use std::time::Duration;

use listing_editor::collaborators::{EditorContext, RecordingNavigator, ScriptedPrompt};
use listing_editor::editor::PreviewRegistry;
use listing_editor::lifecycle::EditorSystem;
use listing_editor::model::{Category, LocalFile, MapEvent, ProductId, ProductImageRow, ProductRecord};
use listing_editor::sequencer::SubmitOutcome;
use listing_editor::session::{EditorActor, SessionError};
use listing_editor::store::memory::{MemoryDataStore, MemoryObjectStore};

const BASE: &str = "https://storage.test";

struct World {
    data: MemoryDataStore,
    objects: MemoryObjectStore,
    prompt: ScriptedPrompt,
    navigator: RecordingNavigator,
}

impl World {
    fn new(prompt: ScriptedPrompt) -> Self {
        Self {
            data: MemoryDataStore::new(),
            objects: MemoryObjectStore::new(BASE),
            prompt,
            navigator: RecordingNavigator::new(),
        }
    }

    fn context(&self) -> EditorContext {
        EditorContext::new(
            Arc::new(self.data.clone()),
            Arc::new(self.objects.clone()),
            Arc::new(self.prompt.clone()),
            Arc::new(self.navigator.clone()),
        )
    }

    fn seed(&self, id: &ProductId, image_count: usize) {
        self.data.seed_product(ProductRecord {
            id: id.clone(),
            title: "Book".to_string(),
            category: "소설/시/희곡".to_string(),
            price: 9000.0,
            description: "Hardcover".to_string(),
            latitude: 37.5665,
            longitude: 126.978,
            address: "Seoul".to_string(),
        });
        self.data.seed_images(
            (0..image_count).map(|i| ProductImageRow::new(id.clone(), format!("https://cdn.test/{i}.jpg"))),
        );
    }
}

/// Full edit session against the in-memory stores.
#[tokio::test]
async fn test_full_edit_session() {
    let world = World::new(ScriptedPrompt::accepting());
    let id = ProductId::from("42");
    world.seed(&id, 2);

    let system = EditorSystem::activate(id.clone(), world.context())
        .await
        .expect("Failed to activate editor");
    assert!(system.load_report.is_complete());

    let snapshot = system.client.snapshot().await.unwrap();
    assert_eq!(snapshot.title, "Book");
    assert_eq!(snapshot.category, Some(Category::Literature));
    assert_eq!(snapshot.price, "9000");
    assert_eq!(snapshot.location.address, "Seoul");
    assert_eq!(snapshot.image_count, 2);
    assert!(!snapshot.show_advance && !snapshot.show_retreat);

    system.client.set_price("10000").await.unwrap();
    system
        .client
        .map_event(MapEvent::new(37.58, 126.98, "Jongno-gu"))
        .await
        .unwrap();
    // Drop the stored front photo, add a new one at the end.
    assert!(system.client.remove_image(0).await.unwrap());
    assert_eq!(
        system
            .client
            .attach_files(vec![LocalFile::new("new.jpg", b"jpeg".to_vec())])
            .await
            .unwrap(),
        1
    );

    let outcome = system.client.submit().await.expect("Failed to submit");
    assert_eq!(outcome, SubmitOutcome::Completed);

    let record = world.data.product(&id).expect("Product not found");
    assert_eq!(record.price, 10000.0);
    assert_eq!(record.address, "Jongno-gu");
    assert_eq!(record.category, "소설/시/희곡");

    let urls = world.data.image_urls(&id);
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], "https://cdn.test/1.jpg");
    assert!(urls[1].starts_with(&format!("{BASE}/storage/v1/object/public/avatars/products/")));
    assert_eq!(world.objects.object_count(), 1);

    // The form is back to its initial empty state.
    let snapshot = system.client.snapshot().await.unwrap();
    assert!(snapshot.title.is_empty());
    assert_eq!(snapshot.image_count, 0);
    assert_eq!(world.navigator.routes(), vec!["/"]);

    system.shutdown().await.expect("Failed to shutdown editor");
}

/// Six stored photos: the carousel pages and re-clamps after a removal.
#[tokio::test]
async fn test_carousel_through_session() {
    let world = World::new(ScriptedPrompt::accepting());
    let id = ProductId::from("7");
    world.seed(&id, 6);

    let system = EditorSystem::activate(id, world.context()).await.unwrap();
    let client = &system.client;

    let first = client.snapshot().await.unwrap();
    assert!(first.show_advance);
    assert!(!first.show_retreat);

    assert!(client.advance().await.unwrap());
    assert!(client.advance().await.unwrap());
    assert!(!client.advance().await.unwrap());

    let paged = client.snapshot().await.unwrap();
    assert_eq!(paged.offset, 2);
    assert_eq!(paged.visible[0].as_deref(), Some("https://cdn.test/2.jpg"));
    assert_eq!(paged.visible[3].as_deref(), Some("https://cdn.test/5.jpg"));
    assert!(paged.show_retreat && paged.show_advance);

    assert!(client.remove_image(0).await.unwrap());
    let clamped = client.snapshot().await.unwrap();
    assert_eq!(clamped.image_count, 5);
    assert_eq!(clamped.offset, 1);
    assert_eq!(clamped.visible[0].as_deref(), Some("https://cdn.test/2.jpg"));

    assert!(!client.remove_image(9).await.unwrap());
    system.shutdown().await.unwrap();
}

/// A missing product still opens an empty, editable form.
#[tokio::test]
async fn test_missing_product_opens_empty_form() {
    let world = World::new(ScriptedPrompt::accepting());
    let system = EditorSystem::activate(ProductId::from("nope"), world.context())
        .await
        .unwrap();

    assert!(!system.load_report.is_complete());
    assert!(system.load_report.images.is_loaded());

    let snapshot = system.client.snapshot().await.unwrap();
    assert!(snapshot.title.is_empty());
    assert_eq!(snapshot.category, None);
    assert_eq!(snapshot.load, Some(system.load_report.clone()));

    // Loading again returns the first report without refetching.
    assert_eq!(system.client.load().await.unwrap(), system.load_report);

    system.shutdown().await.unwrap();
}

/// Declining the confirmation leaves stores and form untouched.
#[tokio::test]
async fn test_declined_submission() {
    let world = World::new(ScriptedPrompt::declining());
    let id = ProductId::from("42");
    world.seed(&id, 1);

    let system = EditorSystem::activate(id.clone(), world.context()).await.unwrap();
    system.client.set_title("Book (2nd ed.)").await.unwrap();

    assert_eq!(system.client.submit().await.unwrap(), SubmitOutcome::Cancelled);
    assert_eq!(world.data.product(&id).unwrap().title, "Book");
    assert_eq!(system.client.snapshot().await.unwrap().title, "Book (2nd ed.)");
    assert!(world.navigator.routes().is_empty());

    system.shutdown().await.unwrap();
}

/// Attaching from disk reads every file before anything is attached.
#[tokio::test]
async fn test_attach_paths_reads_files() {
    let world = World::new(ScriptedPrompt::accepting());
    let id = ProductId::from("42");
    world.seed(&id, 0);

    let dir = tempfile::tempdir().unwrap();
    let cover = dir.path().join("cover.jpg");
    tokio::fs::write(&cover, b"cover").await.unwrap();
    let missing = dir.path().join("missing.jpg");

    let system = EditorSystem::activate(id, world.context()).await.unwrap();

    assert!(system.client.attach_paths(&[&cover, &missing]).await.is_err());
    assert_eq!(system.client.snapshot().await.unwrap().image_count, 0);

    assert_eq!(system.client.attach_paths(&[&cover]).await.unwrap(), 1);
    let snapshot = system.client.snapshot().await.unwrap();
    assert_eq!(snapshot.pending_count, 1);
    assert!(snapshot.visible[0].as_deref().unwrap().starts_with("blob:"));

    system.shutdown().await.unwrap();
}

/// Shutdown completes while a clone of the client is still held, and releases
/// every preview.
#[tokio::test]
async fn test_shutdown_with_live_client_clone() {
    let world = World::new(ScriptedPrompt::accepting());
    let id = ProductId::from("42");
    world.seed(&id, 1);

    let previews = PreviewRegistry::new();
    let ctx = world.context().with_previews(previews.clone());
    let system = EditorSystem::activate(id, ctx).await.unwrap();
    system
        .client
        .attach_files(vec![
            LocalFile::new("a.jpg", vec![1]),
            LocalFile::new("b.jpg", vec![2]),
        ])
        .await
        .unwrap();
    assert_eq!(previews.live_count(), 2);

    let stray = system.client.clone();
    tokio::time::timeout(Duration::from_secs(2), system.shutdown())
        .await
        .expect("shutdown must not wait for other clients")
        .unwrap();

    assert_eq!(previews.live_count(), 0);
    assert!(matches!(stray.snapshot().await, Err(SessionError::Closed)));
}

/// Leaving the page releases previews but keeps the session usable.
#[tokio::test]
async fn test_leave_releases_previews() {
    let world = World::new(ScriptedPrompt::accepting());
    let id = ProductId::from("42");
    world.seed(&id, 2);

    let previews = PreviewRegistry::new();
    let ctx = world.context().with_previews(previews.clone());
    let system = EditorSystem::activate(id, ctx).await.unwrap();
    system
        .client
        .attach_files(vec![LocalFile::new("a.jpg", vec![1])])
        .await
        .unwrap();
    assert_eq!(previews.live_count(), 1);

    system.client.leave().await.unwrap();
    assert_eq!(previews.live_count(), 0);
    assert_eq!(system.client.snapshot().await.unwrap().image_count, 0);

    system.shutdown().await.unwrap();
}

/// A session that never ran reports itself closed.
#[tokio::test]
async fn test_client_without_running_session() {
    let (actor, client) = EditorActor::new(4, ProductId::from("1"), PreviewRegistry::new());
    drop(actor);

    let err = client.snapshot().await.unwrap_err();
    assert!(matches!(err, SessionError::Closed));
}
