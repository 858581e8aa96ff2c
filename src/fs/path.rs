//! Validated hierarchical paths into the MOIBit namespace.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Reasons a [`FilePath`] cannot be built or derived.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An element before the last one carries a period.
    #[error("failed to construct filepath: non-final element '{index}' contains period")]
    NonFinalPeriod { index: usize, element: String },

    /// The extension contains a slash or is empty.
    #[error("failed to construct filepath: slash detected after period or missing extension")]
    MalformedExtension,

    /// The final element has more than one period.
    #[error("failed to construct filepath: multiple periods in final element")]
    MultiplePeriods,

    /// Nothing precedes the period of the final element.
    #[error("failed to construct filepath: missing file name before period")]
    MissingFileName,

    /// Growth was attempted on a file path.
    #[error("cannot grow file path: already pointing to a file")]
    GrowFile,

    /// Growth elements were rejected.
    #[error("cannot grow file path: bad elements: {0}")]
    BadElements(Box<PathError>),

    /// The operation needs a file path.
    #[error("expected a file path, got directory '{0}'")]
    ExpectedFile(String),

    /// The operation needs a directory path.
    #[error("expected a directory path, got file '{0}'")]
    ExpectedDirectory(String),
}

/// Path to a file or directory on MOIBit.
///
/// A path is a list of segments, none of which contain `/` or `.`, plus an
/// optional extension. Paths with an extension point to files, all others
/// point to directories. The empty directory path is the root `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilePath {
    segments: Vec<String>,
    extension: Option<String>,
}

impl FilePath {
    /// Path pointing to the file system root `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from a list of elements.
    ///
    /// Each element may hold several levels separated by slashes; empty
    /// levels are dropped. Only the final element may contain a period, and
    /// at most one, which marks the path as a file with an extension.
    ///
    /// # Example
    /// ```
    /// use moibit::FilePath;
    ///
    /// let fp = FilePath::new(["appdata/users", "userdata.json"]).unwrap();
    /// assert_eq!(fp.path(), "/appdata/users/userdata.json");
    /// assert!(fp.is_file());
    /// ```
    pub fn new<I, S>(elements: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elements: Vec<S> = elements.into_iter().collect();
        let last = elements.len().saturating_sub(1);
        let mut segments = Vec::with_capacity(elements.len());
        let mut extension = None;

        for (index, element) in elements.iter().enumerate() {
            let element = element.as_ref();

            if index == last && element.contains('.') {
                let (name, ext) = split_file_name(element)?;
                let name_segments = clean_path(name);
                if name.ends_with('/') || name_segments.is_empty() {
                    return Err(PathError::MissingFileName);
                }
                segments.extend(name_segments);
                extension = Some(ext);
                continue;
            }

            for segment in clean_path(element) {
                if segment.contains('.') {
                    return Err(PathError::NonFinalPeriod {
                        index,
                        element: element.to_string(),
                    });
                }
                segments.push(segment);
            }
        }

        Ok(Self {
            segments,
            extension,
        })
    }

    /// Full path string, e.g. `/data/devices/hello.txt`.
    pub fn path(&self) -> String {
        let mut path = format!("/{}", self.segments.join("/"));
        if let Some(ext) = &self.extension {
            path.push('.');
            path.push_str(ext);
        }
        path
    }

    /// Check if this path points to `/`.
    pub fn is_root(&self) -> bool {
        self.is_directory() && self.segments.is_empty()
    }

    /// Check if this path points to a directory.
    pub fn is_directory(&self) -> bool {
        self.extension.is_none()
    }

    /// Check if this path points to a file.
    pub fn is_file(&self) -> bool {
        self.extension.is_some()
    }

    /// Path segments, without the extension.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// File extension, if this is a file path.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Final component including the extension, or `None` at the root.
    pub fn name(&self) -> Option<String> {
        let last = self.segments.last()?;
        Some(match &self.extension {
            Some(ext) => format!("{}.{}", last, ext),
            None => last.clone(),
        })
    }

    /// Directory containing this path. The parent of the root is the root.
    pub fn parent(&self) -> FilePath {
        if self.is_directory() && self.segments.len() <= 1 {
            return FilePath::root();
        }

        let keep = self.segments.len().saturating_sub(1);
        FilePath {
            segments: self.segments[..keep].to_vec(),
            extension: None,
        }
    }

    /// New path with `elements` appended to this directory path.
    ///
    /// The combined elements are validated from scratch, so the same rules
    /// as [`FilePath::new`] apply.
    pub fn join<I, S>(&self, elements: I) -> Result<FilePath, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_file() {
            return Err(PathError::GrowFile);
        }

        let combined = self
            .segments
            .iter()
            .cloned()
            .chain(elements.into_iter().map(|e| e.as_ref().to_owned()));

        FilePath::new(combined).map_err(|e| PathError::BadElements(Box::new(e)))
    }

    /// Grow this path in place. On error the path is left untouched.
    pub fn grow<I, S>(&mut self, elements: I) -> Result<(), PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = self.join(elements)?;
        Ok(())
    }

    pub(crate) fn require_file(&self) -> Result<(), PathError> {
        if self.is_directory() {
            return Err(PathError::ExpectedFile(self.path()));
        }
        Ok(())
    }

    pub(crate) fn require_directory(&self) -> Result<(), PathError> {
        if self.is_file() {
            return Err(PathError::ExpectedDirectory(self.path()));
        }
        Ok(())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for FilePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilePath::new([s])
    }
}

/// Split the final element into `(name, extension)`.
fn split_file_name(element: &str) -> Result<(&str, String), PathError> {
    let mut parts = element.split('.');
    let (Some(name), Some(ext), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PathError::MultiplePeriods);
    };

    let mut ext_segments = clean_path(ext);
    if ext_segments.len() != 1 || ext.contains('/') {
        return Err(PathError::MalformedExtension);
    }

    Ok((name, ext_segments.remove(0)))
}

/// Split on slashes and drop empty levels.
fn clean_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_path() {
        let cases: &[(&[&str], &str)] = &[
            (&["data", "devices"], "/data/devices"),
            (&["//data", "devices/", "hello.txt"], "/data/devices/hello.txt"),
            (&["data/devices", "hello.txt"], "/data/devices/hello.txt"),
            (&["/data"], "/data"),
            (&["/data", ""], "/data"),
            (&["data", "/devices"], "/data/devices"),
            (&["data/", "/devices/hello.txt"], "/data/devices/hello.txt"),
        ];

        for (input, expected) in cases {
            let fp = FilePath::new(input.iter()).unwrap();
            assert_eq!(fp.path(), *expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_new_file_path_errors() {
        assert_eq!(
            FilePath::new(["data", "/devices.txt/hello"]),
            Err(PathError::MalformedExtension)
        );
        assert_eq!(
            FilePath::new(["data", "/devices.txt/hello.txt"]),
            Err(PathError::MultiplePeriods)
        );
        assert_eq!(
            FilePath::new(["dat.txt", "/devices.txt/hello.txt"]),
            Err(PathError::NonFinalPeriod {
                index: 0,
                element: "dat.txt".to_string()
            })
        );
        assert_eq!(FilePath::new(["data", "hello."]), Err(PathError::MalformedExtension));
        assert_eq!(FilePath::new(["data", ".txt"]), Err(PathError::MissingFileName));
        assert_eq!(FilePath::new(["data/.txt"]), Err(PathError::MissingFileName));
    }

    #[test]
    fn test_error_messages() {
        let err = FilePath::new(["dat.txt", "hello.txt"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to construct filepath: non-final element '0' contains period"
        );
        let err = FilePath::new(["data", "/devices.txt/hello"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to construct filepath: slash detected after period or missing extension"
        );
    }

    #[test]
    fn test_root() {
        let empty: [&str; 0] = [];
        assert!(FilePath::new(empty).unwrap().is_root());
        assert!(FilePath::new(["", "//", "/"]).unwrap().is_root());
        assert_eq!(FilePath::root().path(), "/");
        assert_eq!(FilePath::root().to_string(), "/");
        assert_eq!(FilePath::root().name(), None);
    }

    #[test]
    fn test_canonical_round_trip() {
        for raw in ["/a/b/c", "a//b///c/", "a/b/c.json", "///x.y"] {
            let fp: FilePath = raw.parse().unwrap();
            let again: FilePath = fp.path().parse().unwrap();
            assert_eq!(fp, again);
            assert_eq!(fp.path(), again.path());
        }
    }

    #[test]
    fn test_canonical_round_trip_multi_element() {
        let cases: &[(&[&str], &str)] = &[
            (&["a//", "/b/", "c.txt"], "/a/b/c.txt"),
            (&["/data/", "devices//sensors", "reading.json"], "/data/devices/sensors/reading.json"),
            (&["//x", "y//", "//z"], "/x/y/z"),
            (&["a/b", "", "c/d/e.log"], "/a/b/c/d/e.log"),
            (&["", "logs", "/2021//03/"], "/logs/2021/03"),
        ];
        for (elements, expected) in cases {
            let fp = FilePath::new(elements.iter().copied()).unwrap();
            assert_eq!(fp.path(), *expected);

            let again = FilePath::new([fp.path()]).unwrap();
            assert_eq!(fp, again);
            assert_eq!(fp.path(), again.path());

            let parsed: FilePath = fp.path().parse().unwrap();
            assert_eq!(fp, parsed);
        }
    }

    #[test]
    fn test_classification() {
        let dir = FilePath::new(["data", "devices"]).unwrap();
        assert!(dir.is_directory());
        assert!(!dir.is_file());
        assert!(!dir.is_root());
        assert_eq!(dir.name().as_deref(), Some("devices"));

        let file = FilePath::new(["data", "hello.txt"]).unwrap();
        assert!(file.is_file());
        assert_eq!(file.extension(), Some("txt"));
        assert_eq!(file.segments(), ["data".to_string(), "hello".to_string()]);
        assert_eq!(file.name().as_deref(), Some("hello.txt"));
    }

    #[test]
    fn test_parent() {
        let root = FilePath::root();
        assert_eq!(root.parent(), root);
        assert_eq!(root.parent().parent(), root);

        let top = FilePath::new(["data"]).unwrap();
        assert!(top.parent().is_root());

        let file = FilePath::new(["data", "devices", "hello.txt"]).unwrap();
        let parent = file.parent();
        assert_eq!(parent.path(), "/data/devices");
        assert!(parent.is_directory());

        let top_file = FilePath::new(["hello.txt"]).unwrap();
        assert!(top_file.parent().is_root());
    }

    #[test]
    fn test_grow() {
        let mut fp = FilePath::new(["data"]).unwrap();
        fp.grow(["devices/sensors"]).unwrap();
        assert_eq!(fp.path(), "/data/devices/sensors");

        fp.grow(["reading.json"]).unwrap();
        assert_eq!(fp.path(), "/data/devices/sensors/reading.json");
    }

    #[test]
    fn test_grow_file_fails_without_mutation() {
        let mut fp = FilePath::new(["data", "hello.txt"]).unwrap();
        let before = fp.clone();

        assert_eq!(fp.grow(["more"]), Err(PathError::GrowFile));
        assert_eq!(fp, before);
    }

    #[test]
    fn test_grow_bad_elements_without_mutation() {
        let mut fp = FilePath::new(["data"]).unwrap();
        let before = fp.clone();

        let err = fp.grow(["a.b", "c.txt"]).unwrap_err();
        assert_eq!(
            err,
            PathError::BadElements(Box::new(PathError::NonFinalPeriod {
                index: 1,
                element: "a.b".to_string()
            }))
        );
        assert_eq!(fp, before);
    }

    #[test]
    fn test_require_kind() {
        let dir = FilePath::new(["data"]).unwrap();
        let file = FilePath::new(["data.bin"]).unwrap();

        assert!(dir.require_directory().is_ok());
        assert_eq!(dir.require_file(), Err(PathError::ExpectedFile("/data".to_string())));
        assert!(file.require_file().is_ok());
        assert_eq!(
            file.require_directory(),
            Err(PathError::ExpectedDirectory("/data.bin".to_string()))
        );
    }
}
