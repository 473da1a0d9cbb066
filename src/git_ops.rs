use std::path::Path;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use crate::error::{GitverError, Result};

/// Wrapper around git2 Repository for the version queries gitver needs.
///
/// Provides the three reads the generator consumes: the describe string,
/// the full HEAD revision, and the committer timestamp of the described
/// commit. All methods capture from the same open repository, so the
/// triple reflects a single working-tree snapshot.
pub struct GitRepo {
    repo: Repository,
}

impl std::fmt::Debug for GitRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepo")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl GitRepo {
    /// Creates a new GitRepo instance for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent directories.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn new() -> Result<Self> {
        Self::at(Path::new("."))
    }

    /// Creates a GitRepo for a repository discovered from an explicit path.
    ///
    /// # Arguments
    /// * `path` - Directory inside the repository (need not be its root)
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If the path is not inside a git repository
    pub fn at(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            GitverError::repository(format!("Not in a git repository: {}", e.message()))
        })?;
        Ok(GitRepo { repo })
    }

    /// Describes the working tree relative to the nearest reachable tag.
    ///
    /// Equivalent to `git describe --tags --dirty --always`: an exact tag
    /// for a release commit, a tag annotated with distance and short hash
    /// otherwise, a bare short hash when no tag is reachable, with `-dirty`
    /// appended when the tree has uncommitted changes.
    ///
    /// # Returns
    /// * `Ok(String)` - The describe string
    /// * `Err` - If the describe query fails (e.g. an empty repository)
    pub fn describe(&self) -> Result<String> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags().show_commit_oid_as_fallback(true);

        let describe = self.repo.describe(&opts)?;

        let mut format = DescribeFormatOptions::new();
        format.dirty_suffix("-dirty");

        Ok(describe.format(Some(&format))?)
    }

    /// Gets the full revision hash of HEAD.
    ///
    /// # Returns
    /// * `Ok(String)` - 40-character commit hash
    /// * `Err` - If HEAD is unborn or invalid
    pub fn head_rev(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head
            .target()
            .ok_or_else(|| GitverError::repository("HEAD is detached or invalid".to_string()))?;
        Ok(oid.to_string())
    }

    /// Gets the committer timestamp of the commit a describe string names.
    ///
    /// The describe string itself is used as a revision, the same way the
    /// upstream tool runs `git show <desc>`. A dirty-suffixed description
    /// is not a resolvable revision, so this fails for dirty trees; callers
    /// substitute the current time and continue.
    ///
    /// # Arguments
    /// * `desc` - A describe string naming the commit
    ///
    /// # Returns
    /// * `Ok(String)` - RFC 3339 timestamp in the commit's own UTC offset
    /// * `Err` - If the revision cannot be resolved or the time is out of range
    pub fn commit_timestamp(&self, desc: &str) -> Result<String> {
        let object = self.repo.revparse_single(desc)?;
        let commit = object
            .peel(git2::ObjectType::Commit)?
            .into_commit()
            .map_err(|_| {
                GitverError::timestamp(format!("'{}' does not resolve to a commit", desc))
            })?;

        let time = commit.time();
        let utc = DateTime::from_timestamp(time.seconds(), 0).ok_or_else(|| {
            GitverError::timestamp(format!(
                "commit time {} for '{}' is out of range",
                time.seconds(),
                desc
            ))
        })?;
        let offset = FixedOffset::east_opt(time.offset_minutes() * 60).ok_or_else(|| {
            GitverError::timestamp(format!(
                "commit timezone offset {} minutes for '{}' is out of range",
                time.offset_minutes(),
                desc
            ))
        })?;

        Ok(utc
            .with_timezone(&offset)
            .to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}
