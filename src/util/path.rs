//! Path normalization without filesystem access.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by collapsing repeated separators and resolving `.` and
/// `..` components without filesystem access.
///
/// A `..` pops the last real segment. Against the root of an absolute path
/// it is discarded, since root has no parent; at the head of a relative
/// path it is retained.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }
    components.iter().collect()
}

/// Join segments with separators and normalize the result.
///
/// A later absolute segment is appended after the ones before it, not taken
/// as a new root.
pub fn join<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut joined = PathBuf::new();
    for segment in segments {
        let segment = segment.as_ref();
        if joined.as_os_str().is_empty() {
            joined.push(segment);
        } else {
            for component in segment.components() {
                match component {
                    Component::RootDir | Component::Prefix(_) => {}
                    other => joined.push(other),
                }
            }
        }
    }
    normalize(&joined)
}
