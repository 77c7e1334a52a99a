use crate::campus_actor::{CampusAction, CampusError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Campus, CampusCreate, CampusId, CampusPatch, StatusReport};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the Campus actor: CRUD, soft delete, lifecycle transitions and queries.
///
/// Every mutating call is a single message to the actor, so the load, mutate and store
/// steps for one campus never interleave with another request.
#[derive(Clone)]
pub struct CampusClient {
    inner: ResourceClient<Campus>,
}

#[async_trait]
impl ActorClient<Campus> for CampusClient {
    type Error = CampusError;

    fn inner(&self) -> &ResourceClient<Campus> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CampusError::from(e)
    }
}

impl CampusClient {
    pub fn new(inner: ResourceClient<Campus>) -> Self {
        Self { inner }
    }

    /// Store a new campus. Without a status code it starts `OPEN`.
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create(&self, params: CampusCreate) -> Result<Campus, CampusError> {
        debug!("Sending request");
        let campus = self.inner.create(params).await?;
        info!(id = %campus.id, "Campus created");
        Ok(campus)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: CampusId) -> Result<Campus, CampusError> {
        self.get(id.clone())
            .await?
            .ok_or(CampusError::NotFound(id))
    }

    pub async fn find_all(&self) -> Result<Vec<Campus>, CampusError> {
        self.list().await
    }

    /// Bulk overwrite. Status codes in the patch bypass the transition table.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: CampusId, patch: CampusPatch) -> Result<Campus, CampusError> {
        debug!(?patch, "Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Soft delete: the campus is closed and stays in the store.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: CampusId) -> Result<Campus, CampusError> {
        let campus = self.transition(id, CampusAction::Close).await?;
        info!(id = %campus.id, "Campus deactivated");
        Ok(campus)
    }

    pub async fn open(&self, id: CampusId) -> Result<Campus, CampusError> {
        self.transition(id, CampusAction::Open).await
    }

    pub async fn close(&self, id: CampusId) -> Result<Campus, CampusError> {
        self.transition(id, CampusAction::Close).await
    }

    /// Fails with [`CampusError::IllegalTransition`] when the campus is closed.
    pub async fn enter_maintenance(&self, id: CampusId) -> Result<Campus, CampusError> {
        self.transition(id, CampusAction::EnterMaintenance).await
    }

    #[instrument(skip(self))]
    async fn transition(&self, id: CampusId, action: CampusAction) -> Result<Campus, CampusError> {
        debug!("Sending request");
        Ok(self.inner.perform_action(id, action).await?)
    }

    pub async fn status(&self, id: CampusId) -> Result<StatusReport, CampusError> {
        let mut campus = self.find_by_id(id).await?;
        Ok(campus.status_report())
    }

    /// Campuses whose stored code matches `code`, ignoring case.
    ///
    /// A missing or blank code matches nothing; the store is not consulted.
    #[instrument(skip(self))]
    pub async fn find_by_state(&self, code: Option<&str>) -> Result<Vec<Campus>, CampusError> {
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(Vec::new());
        };
        let campuses = self.list().await?;
        Ok(campuses
            .into_iter()
            .filter(|campus| campus.is_in_state(code))
            .collect())
    }

    /// Campuses that currently accept activity.
    pub async fn find_available(&self) -> Result<Vec<Campus>, CampusError> {
        let campuses = self.list().await?;
        Ok(campuses
            .into_iter()
            .filter_map(|mut campus| campus.accepts_activity().then_some(campus))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{
        create_mock_client, expect_action, expect_get, expect_list, expect_update, MockClient,
    };
    use crate::lifecycle::{CampusStatus, Transition};

    fn campus(n: u32, code: &str) -> Campus {
        Campus::new(
            CampusId::from(n),
            CampusCreate {
                name: format!("Campus {n}"),
                address: "1 Quad Road".to_string(),
                city: "Riverton".to_string(),
                phone: "555-0100".to_string(),
                status_code: Some(code.to_string()),
            },
        )
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_campus() {
        let mut mock = MockClient::<Campus>::new();
        mock.expect_get(CampusId::from(4)).return_ok(None);
        let client = CampusClient::new(mock.client());

        let err = client.find_by_id(CampusId::from(4)).await.unwrap_err();
        assert_eq!(err, CampusError::NotFound(CampusId::from(4)));
        mock.verify();
    }

    #[tokio::test]
    async fn create_returns_stored_campus() {
        let mut mock = MockClient::<Campus>::new();
        mock.expect_create().return_ok(campus(1, "OPEN"));
        let client = CampusClient::new(mock.client());

        let created = client
            .create(CampusCreate {
                name: "Campus 1".to_string(),
                address: "1 Quad Road".to_string(),
                city: "Riverton".to_string(),
                phone: String::new(),
                status_code: None,
            })
            .await
            .unwrap();
        assert_eq!(created.id, CampusId::from(1));
        assert_eq!(created.status_code(), Some("OPEN"));
        mock.verify();
    }

    #[tokio::test]
    async fn update_passes_entity_errors_through() {
        let mut mock = MockClient::<Campus>::new();
        mock.expect_update(CampusId::from(3)).return_err(FrameworkError::EntityError(Box::new(
            CampusError::InvalidArgument("city must not be blank".to_string()),
        )));
        mock.expect_update(CampusId::from(3)).return_ok(campus(3, "CLOSED"));
        let client = CampusClient::new(mock.client());

        let err = client
            .update(CampusId::from(3), CampusPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, CampusError::InvalidArgument("city must not be blank".to_string()));

        let updated = client.update(CampusId::from(3), CampusPatch::default()).await.unwrap();
        assert_eq!(updated.status_code(), Some("CLOSED"));
        mock.verify();
    }

    #[tokio::test]
    async fn update_forwards_patch_unchanged() {
        let (inner, mut receiver) = create_mock_client::<Campus>(10);
        let client = CampusClient::new(inner);

        let task = tokio::spawn(async move {
            let patch = CampusPatch {
                name: Some("North Annex".to_string()),
                status_code: Some("OPEN".to_string()),
                usable: false,
                ..CampusPatch::default()
            };
            client.update(CampusId::from(5), patch).await
        });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, CampusId::from(5));
        assert_eq!(patch.name.as_deref(), Some("North Annex"));
        assert_eq!(patch.status_code.as_deref(), Some("OPEN"));
        assert!(!patch.usable);
        assert!(patch.city.is_none());
        responder.send(Ok(campus(5, "CLOSED"))).unwrap();

        let updated = task.await.unwrap().unwrap();
        assert_eq!(updated.status_code(), Some("CLOSED"));
    }

    #[tokio::test]
    async fn delete_of_missing_campus_sends_nothing_else() {
        let (inner, mut receiver) = create_mock_client::<Campus>(10);
        let client = CampusClient::new(inner);

        let task = tokio::spawn(async move { client.delete(CampusId::from(9)).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, CampusId::from(9));
        assert_eq!(action, CampusAction::Close);
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, CampusError::NotFound(CampusId::from(9)));
        // The client was moved into the task and is gone; the channel must be empty.
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn illegal_transition_reaches_caller_untouched() {
        let lifecycle = CampusStatus::Closed
            .apply(Transition::EnterMaintenance)
            .unwrap_err();
        let mut mock = MockClient::<Campus>::new();
        mock.expect_action(CampusId::from(1)).return_err(FrameworkError::EntityError(Box::new(
            CampusError::IllegalTransition(lifecycle.clone()),
        )));
        let client = CampusClient::new(mock.client());

        let err = client.enter_maintenance(CampusId::from(1)).await.unwrap_err();
        assert_eq!(err, CampusError::IllegalTransition(lifecycle));
        mock.verify();
    }

    #[tokio::test]
    async fn blank_state_query_never_touches_the_store() {
        let (inner, mut receiver) = create_mock_client::<Campus>(10);
        let client = CampusClient::new(inner);

        assert!(client.find_by_state(None).await.unwrap().is_empty());
        assert!(client.find_by_state(Some("")).await.unwrap().is_empty());
        assert!(client.find_by_state(Some("   ")).await.unwrap().is_empty());

        drop(client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn state_query_ignores_case() {
        let (inner, mut receiver) = create_mock_client::<Campus>(10);
        let client = CampusClient::new(inner);

        let task = tokio::spawn(async move { client.find_by_state(Some("maintenance")).await });
        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder
            .send(Ok(vec![campus(1, "OPEN"), campus(2, "MAINTENANCE"), campus(3, "Maintenance")]))
            .unwrap();

        let found = task.await.unwrap().unwrap();
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["campus_2", "campus_3"]);
    }

    #[tokio::test]
    async fn available_means_accepting_activity() {
        let mut mock = MockClient::<Campus>::new();
        mock.expect_list().return_ok(vec![
            campus(1, "OPEN"),
            campus(2, "CLOSED"),
            campus(3, "MAINTENANCE"),
            campus(4, "SOMETHING_ELSE"),
        ]);
        let client = CampusClient::new(mock.client());

        let available = client.find_available().await.unwrap();
        let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["campus_1", "campus_4"]);
        mock.verify();
    }

    #[tokio::test]
    async fn status_report_is_built_from_fetched_record() {
        let (inner, mut receiver) = create_mock_client::<Campus>(10);
        let client = CampusClient::new(inner);

        let task = tokio::spawn(async move { client.status(CampusId::from(2)).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, CampusId::from(2));
        responder.send(Ok(Some(campus(2, "closed")))).unwrap();

        let report = task.await.unwrap().unwrap();
        assert_eq!(report.code, "closed");
        assert_eq!(report.state, CampusStatus::Closed);
        assert!(!report.schedulable);
        assert_eq!(report.description, CampusStatus::Closed.description());
    }
}
