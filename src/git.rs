use crate::error::{BranchlocError, Result};
use crate::model::BranchMap;
use crate::process;
use std::path::Path;

/// Reference namespaces queried, in merge order. Later namespaces win on
/// name collisions.
const NAMESPACES: [&str; 2] = ["refs/heads/", "refs/remotes/"];

/// List local and remote-tracking branches of `repo` as name → revision.
///
/// Each namespace is queried twice, once for short names and once for the
/// matching object ids, and the two outputs are paired line by line. Any
/// failed invocation or a name/revision count mismatch aborts the whole
/// listing.
pub fn list_branches(git: &str, repo: &Path, remote: &str) -> Result<BranchMap> {
    let mut branches = BranchMap::new();
    for namespace in NAMESPACES {
        let names = for_each_ref(git, repo, "%(refname:short)", namespace)?;
        let revisions = for_each_ref(git, repo, "%(objectname)", namespace)?;
        merge_refs(&mut branches, namespace, names, revisions, remote)?;
    }
    Ok(branches)
}

fn for_each_ref(git: &str, repo: &Path, format: &str, namespace: &str) -> Result<Vec<String>> {
    let format_arg = format!("--format={format}");
    let result = process::run(git, &["for-each-ref", &format_arg, namespace], Some(repo))?;
    if !result.success() {
        return Err(BranchlocError::ToolExit {
            program: git.to_string(),
            code: result.exit_code,
        });
    }
    Ok(clean_lines(&result.stdout))
}

/// Pair `names` with `revisions` by position and fold them into `branches`.
///
/// A name equal to `remote` is the remote's symbolic HEAD alias, not a
/// branch, and is dropped.
pub fn merge_refs(
    branches: &mut BranchMap,
    namespace: &str,
    names: Vec<String>,
    revisions: Vec<String>,
    remote: &str,
) -> Result<()> {
    if names.len() != revisions.len() {
        return Err(BranchlocError::RefMismatch {
            namespace: namespace.to_string(),
            names: names.len(),
            revisions: revisions.len(),
        });
    }
    for (name, revision) in names.into_iter().zip(revisions) {
        if name == remote {
            continue;
        }
        branches.insert(name, revision);
    }
    Ok(())
}

/// Split raw ref output into lines, stripping surrounding whitespace and
/// the quotes some shells leave around each ref, and dropping empties.
pub fn clean_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| {
            line.trim()
                .trim_matches(|c| c == '\'' || c == '"')
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
