// tests/support/helpers.rs
use std::sync::Arc;

use slugtree_core::application::commands::nodes::CreateNodeCommand;
use slugtree_core::application::dto::NodeDto;
use slugtree_core::application::services::ApplicationServices;
use slugtree_core::domain::slug::SlugSettings;
use slugtree_core::infrastructure::repositories::InMemoryNodeRepository;
use slugtree_core::infrastructure::util::DefaultTransliterator;

use super::mocks::{FixedClock, RecordingWriteRepo};

pub struct TestApp {
    pub services: ApplicationServices,
    pub store: Arc<InMemoryNodeRepository>,
    pub writes: Arc<RecordingWriteRepo>,
}

pub fn test_app() -> TestApp {
    test_app_with(&SlugSettings::default())
}

pub fn test_app_with(settings: &SlugSettings) -> TestApp {
    let store = Arc::new(InMemoryNodeRepository::new());
    let writes = Arc::new(RecordingWriteRepo::new(Arc::clone(&store)));
    let services = ApplicationServices::new(
        writes.clone(),
        store.clone(),
        Arc::new(FixedClock),
        Arc::new(DefaultTransliterator),
        settings,
    );
    TestApp {
        services,
        store,
        writes,
    }
}

impl TestApp {
    pub async fn create(&self, short_title: &str, parent: Option<&NodeDto>) -> NodeDto {
        let mut builder = CreateNodeCommand::builder().short_title(short_title);
        if let Some(parent) = parent {
            builder = builder.parent(parent.id);
        }
        self.services
            .node_commands
            .create_node(builder.build().expect("command"))
            .await
            .expect("create node")
    }

    pub async fn path_of(&self, node: &NodeDto) -> String {
        use slugtree_core::application::queries::nodes::GetNodeByIdQuery;
        self.services
            .node_queries
            .get_node_by_id(GetNodeByIdQuery { id: node.id })
            .await
            .expect("node")
            .slug_path
    }
}
