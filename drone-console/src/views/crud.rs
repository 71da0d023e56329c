//! Generic CRUD view
//!
//! One model serves the Drones, Attributes and Policies screens:
//!
//! - `load` replaces the local list, keeping the old one if the fetch fails
//! - `open_add` / `open_edit` seed the dialog, `cancel` discards it
//! - `save` creates (append) or updates (replace by id)
//! - `delete` removes locally only after the backend acknowledged it

use drone_client::EntityOps;
use shared::Record;

use super::ViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(String),
}

/// Open edit/create dialog
#[derive(Debug, Clone)]
pub struct Dialog<E> {
    pub mode: DialogMode,
    pub draft: E,
}

#[derive(Debug, Clone)]
pub struct CrudView<E: Record> {
    items: Vec<E>,
    loading: bool,
    status: String,
    saving: bool,
    dialog: Option<Dialog<E>>,
    error: Option<String>,
}

impl<E: Record> Default for CrudView<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> CrudView<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            status: String::new(),
            saving: false,
            dialog: None,
            error: None,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// Blocking overlay is shown
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Overlay text, e.g. "Fetching drones..."
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Save button pending
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn dialog(&self) -> Option<&Dialog<E>> {
        self.dialog.as_ref()
    }

    /// Dismissible error banner
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|e| e.id() == Some(id))
    }

    pub async fn load<O>(&mut self, ops: &O) -> Result<(), ViewError>
    where
        O: EntityOps<E> + ?Sized,
    {
        self.begin(format!("Fetching {}...", plural_lower::<E>()));
        let result = ops.list().await;
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(
                    resource = E::RESOURCE.plural(),
                    count = items.len(),
                    "list loaded"
                );
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    resource = E::RESOURCE.plural(),
                    error = %e,
                    "Error fetching records"
                );
                Err(e.into())
            }
        }
    }

    /// Open the dialog with cleared fields
    pub fn open_add(&mut self) {
        self.dialog = Some(Dialog {
            mode: DialogMode::Create,
            draft: E::default(),
        });
    }

    /// Open the dialog seeded from an existing record
    pub fn open_edit(&mut self, id: &str) -> Result<(), ViewError> {
        let existing = self.find(id).cloned().ok_or_else(|| ViewError::NotFound {
            resource: E::RESOURCE.singular(),
            id: id.to_string(),
        })?;
        self.dialog = Some(Dialog {
            mode: DialogMode::Edit(id.to_string()),
            draft: existing,
        });
        Ok(())
    }

    pub fn draft_mut(&mut self) -> Result<&mut E, ViewError> {
        self.dialog
            .as_mut()
            .map(|d| &mut d.draft)
            .ok_or(ViewError::NoDialog)
    }

    /// Close the dialog; the list is untouched
    pub fn cancel(&mut self) {
        self.dialog = None;
    }

    /// Submit the dialog. On failure the dialog stays open and the message
    /// goes to the error banner.
    pub async fn save<O>(&mut self, ops: &O) -> Result<E, ViewError>
    where
        O: EntityOps<E> + ?Sized,
    {
        let dialog = self.dialog.clone().ok_or(ViewError::NoDialog)?;
        self.saving = true;
        self.error = None;

        let result = match &dialog.mode {
            DialogMode::Edit(id) => {
                self.status = format!("Saving {}...", E::RESOURCE.singular());
                ops.update(&dialog.draft, id).await
            }
            DialogMode::Create => {
                self.status = format!("Creating {}...", E::RESOURCE.singular());
                ops.create(&dialog.draft).await
            }
        };
        self.saving = false;

        match result {
            Ok(saved) => {
                match &dialog.mode {
                    DialogMode::Edit(id) => {
                        for item in self.items.iter_mut().filter(|e| e.id() == Some(id.as_str())) {
                            *item = saved.clone();
                        }
                    }
                    DialogMode::Create => self.items.push(saved.clone()),
                }
                self.dialog = None;
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(
                    resource = E::RESOURCE.singular(),
                    error = %e,
                    "Error saving record"
                );
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Delete on the backend, then drop the record locally
    pub async fn delete<O>(&mut self, ops: &O, id: &str) -> Result<(), ViewError>
    where
        O: EntityOps<E> + ?Sized,
    {
        self.begin(format!("Deleting {}...", E::RESOURCE.singular()));
        let result = ops.remove(id).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.items.retain(|e| e.id() != Some(id));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    resource = E::RESOURCE.singular(),
                    id,
                    error = %e,
                    "Error deleting record"
                );
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    fn begin(&mut self, status: String) {
        self.loading = true;
        self.status = status;
    }
}

fn plural_lower<E: Record>() -> String {
    E::RESOURCE.plural().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drone_client::{ClientResult, NetworkError, StatusCode};
    use shared::{Attribute, Drone, Policy};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory backend with a switch to fail every call
    struct FakeOps<E> {
        stored: Mutex<Vec<E>>,
        fail: Mutex<Option<String>>,
        calls: AtomicUsize,
        next_id: AtomicUsize,
    }

    impl<E: Record> FakeOps<E> {
        fn with(records: Vec<E>) -> Self {
            Self {
                stored: Mutex::new(records),
                fail: Mutex::new(None),
                calls: AtomicUsize::new(0),
                next_id: AtomicUsize::new(100),
            }
        }

        fn fail_with(&self, message: &str) {
            *self.fail.lock().unwrap() = Some(message.to_string());
        }

        fn check(&self) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail.lock().unwrap().clone() {
                Some(message) => Err(NetworkError::Status {
                    status: StatusCode::BAD_REQUEST,
                    message,
                }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    trait WithId {
        fn set_id(&mut self, id: String);
    }
    impl WithId for Drone {
        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }
    impl WithId for Attribute {
        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }
    impl WithId for Policy {
        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    #[async_trait]
    impl<E: Record + WithId> EntityOps<E> for FakeOps<E> {
        async fn list(&self) -> ClientResult<Vec<E>> {
            self.check()?;
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn create(&self, entity: &E) -> ClientResult<E> {
            self.check()?;
            let mut created = entity.clone();
            created.set_id(self.next_id.fetch_add(1, Ordering::SeqCst).to_string());
            self.stored.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update(&self, entity: &E, id: &str) -> ClientResult<E> {
            self.check()?;
            let mut updated = entity.clone();
            updated.set_id(id.to_string());
            Ok(updated)
        }

        async fn remove(&self, _id: &str) -> ClientResult<()> {
            self.check()
        }
    }

    fn drone(id: &str, model: &str, zone: i32) -> Drone {
        Drone {
            id: Some(id.to_string()),
            model_type: model.to_string(),
            zone,
        }
    }

    #[tokio::test]
    async fn test_load_replaces_items() {
        let ops = FakeOps::with(vec![drone("1", "Small", 1), drone("2", "Edge", 2)]);
        let mut view = CrudView::<Drone>::new();

        view.load(&ops).await.unwrap();
        assert_eq!(view.items().len(), 2);
        assert!(!view.is_loading());
        assert_eq!(view.status(), "Fetching drones...");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_items() {
        let ops = FakeOps::with(vec![drone("1", "Small", 1)]);
        let mut view = CrudView::<Drone>::new();
        view.load(&ops).await.unwrap();

        ops.fail_with("backend down");
        assert!(view.load(&ops).await.is_err());
        assert_eq!(view.items(), &[drone("1", "Small", 1)]);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_add_appends_created_record() {
        let ops = FakeOps::<Policy>::with(vec![]);
        let mut view = CrudView::<Policy>::new();
        view.load(&ops).await.unwrap();

        view.open_add();
        assert_eq!(view.dialog().unwrap().mode, DialogMode::Create);
        assert_eq!(view.dialog().unwrap().draft, Policy::default());
        {
            let draft = view.draft_mut().unwrap();
            draft.zone = 3;
            draft.start_time = "06:00".into();
            draft.end_time = "20:00".into();
        }
        let created = view.save(&ops).await.unwrap();

        assert_eq!(created.id.as_deref(), Some("100"));
        assert!(view.dialog().is_none());
        assert_eq!(view.items(), &[created.clone()]);
        // Round trip: the record is findable by the returned id
        assert_eq!(view.find("100").unwrap().start_time, "06:00");
    }

    #[tokio::test]
    async fn test_edit_replaces_by_id() {
        let ops = FakeOps::with(vec![drone("1", "Small", 1), drone("2", "Edge", 2)]);
        let mut view = CrudView::<Drone>::new();
        view.load(&ops).await.unwrap();

        view.open_edit("2").unwrap();
        assert_eq!(view.dialog().unwrap().draft, drone("2", "Edge", 2));
        view.draft_mut().unwrap().zone = 5;
        view.save(&ops).await.unwrap();

        assert_eq!(view.items(), &[drone("1", "Small", 1), drone("2", "Edge", 5)]);
        assert_eq!(view.status(), "Saving Drone...");
    }

    #[tokio::test]
    async fn test_edit_then_cancel_leaves_list_unchanged() {
        let ops = FakeOps::with(vec![drone("1", "Small", 1)]);
        let mut view = CrudView::<Drone>::new();
        view.load(&ops).await.unwrap();
        let calls = ops.calls();

        view.open_edit("1").unwrap();
        view.draft_mut().unwrap().model_type = "Terminal".into();
        view.cancel();

        assert!(view.dialog().is_none());
        assert_eq!(view.items(), &[drone("1", "Small", 1)]);
        assert_eq!(ops.calls(), calls);
    }

    #[tokio::test]
    async fn test_save_failure_sets_banner_and_keeps_dialog() {
        let ops = FakeOps::<Attribute>::with(vec![]);
        let mut view = CrudView::<Attribute>::new();
        view.open_add();
        view.draft_mut().unwrap().name = "Zone".into();

        ops.fail_with("name already exists");
        assert!(view.save(&ops).await.is_err());
        assert_eq!(view.error(), Some("name already exists"));
        assert!(view.dialog().is_some());
        assert!(view.items().is_empty());
        assert!(!view.is_saving());

        view.dismiss_error();
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_delete_waits_for_acknowledgement() {
        let ops = FakeOps::with(vec![drone("1", "Small", 1), drone("2", "Edge", 2)]);
        let mut view = CrudView::<Drone>::new();
        view.load(&ops).await.unwrap();

        ops.fail_with("chain busy");
        assert!(view.delete(&ops, "1").await.is_err());
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.error(), Some("chain busy"));

        *ops.fail.lock().unwrap() = None;
        view.delete(&ops, "1").await.unwrap();
        assert_eq!(view.items(), &[drone("2", "Edge", 2)]);
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut view = CrudView::<Drone>::new();
        assert!(matches!(
            view.open_edit("nope"),
            Err(ViewError::NotFound { resource: "Drone", .. })
        ));
        assert!(matches!(view.draft_mut(), Err(ViewError::NoDialog)));
    }

    #[tokio::test]
    async fn test_save_without_dialog() {
        let ops = FakeOps::<Drone>::with(vec![]);
        let mut view = CrudView::<Drone>::new();
        assert!(matches!(view.save(&ops).await, Err(ViewError::NoDialog)));
        assert_eq!(ops.calls(), 0);
    }
}
