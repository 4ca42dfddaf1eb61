use crate::scene::ObjectId;

/// Failures while building or editing the scene graph.
///
/// Interaction paths (ray casting, hover, click dispatch) never fail; only
/// structural edits coming from the asset host can reference bad handles.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown object id {0:?}")]
    UnknownObject(ObjectId),
    #[error("unknown parent id {0:?} for object `{1}`")]
    UnknownParent(ObjectId, String),
}

pub type SceneResult<T> = Result<T, SceneError>;
