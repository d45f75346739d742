use aliri_braid::braid;

/// Identifier of a run, e.g. `5a1f0c2e4b0d3e2f1a9c8b7d`
#[braid(serde)]
pub struct RunId;

/// Identifier of a commit in a project's file history.
#[braid(serde)]
pub struct CommitId;

/// Content-address of a blob.
#[braid(serde)]
pub struct BlobKey;

/// Identifier of a project tag.
#[braid(serde)]
pub struct TagId;
