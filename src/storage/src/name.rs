// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Typed resource names.
//!
//! Cloud Storage identifies most resources with strings such as
//! `projects/_/buckets/my-bucket/folders/a/b/`. The types in this module parse
//! and format those strings. Each name matches a single template, except
//! [IntelligenceConfigName], which accepts one of three templates.
//!
//! Single-segment variables match one non-empty segment (without `/`).
//! Variables written as `{name=**}` match the rest of the string, including
//! any `/` characters, but reject empty inner segments such as `a//b`. Values
//! are neither encoded nor decoded.
//!
//! # Example
//! ```
//! # use gcs_storage::name::FolderName;
//! let name = FolderName::parse("projects/_/buckets/my-bucket/folders/a/b/")?;
//! assert_eq!(name.bucket(), "my-bucket");
//! assert_eq!(name.folder(), "a/b/");
//! assert_eq!(name.to_string(), "projects/_/buckets/my-bucket/folders/a/b/");
//! # Ok::<(), gcs_storage::name::ResourceNameError>(())
//! ```

use std::collections::BTreeMap;

/// The error returned when a string does not match a resource name template.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResourceNameError {
    #[error("{name:?} does not match the resource name template {template}")]
    InvalidFormat {
        name: String,
        template: &'static str,
    },
}

impl ResourceNameError {
    pub(crate) fn invalid(name: &str, template: &'static str) -> Self {
        Self::InvalidFormat {
            name: name.to_string(),
            template,
        }
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Variable,
    Rest,
}

fn segments(template: &str) -> impl Iterator<Item = Segment<'_>> {
    template.split('/').map(|s| match s {
        s if s.starts_with('{') && s.ends_with("=**}") => Segment::Rest,
        s if s.starts_with('{') => Segment::Variable,
        s => Segment::Literal(s),
    })
}

/// Returns the values captured by the template variables, in order.
fn match_template<'a>(template: &str, name: &'a str) -> Option<Vec<&'a str>> {
    let mut values = Vec::new();
    let mut remains = name;
    let mut segments = segments(template).peekable();
    while let Some(segment) = segments.next() {
        let last = segments.peek().is_none();
        let (current, rest) = match segment {
            Segment::Rest => (remains, ""),
            _ => match remains.split_once('/') {
                Some((current, rest)) if !last => (current, rest),
                None if last => (remains, ""),
                _ => return None,
            },
        };
        match segment {
            Segment::Literal(l) if l != current => return None,
            Segment::Literal(_) => {}
            Segment::Variable | Segment::Rest if current.is_empty() => return None,
            Segment::Rest if has_empty_segment(current) => return None,
            Segment::Variable | Segment::Rest => values.push(current),
        }
        remains = rest;
    }
    Some(values)
}

/// A trailing `/` is allowed, other empty segments are not.
fn has_empty_segment(value: &str) -> bool {
    let value = value.strip_suffix('/').unwrap_or(value);
    value.split('/').any(str::is_empty)
}

/// Returns true if the values for single-segment variables contain no `/`.
fn single_segments(template: &str, values: &[&str]) -> bool {
    let mut values = values.iter();
    segments(template).all(|s| match s {
        Segment::Literal(_) => true,
        Segment::Variable => values.next().is_none_or(|v| !v.contains('/')),
        Segment::Rest => values.next().is_some(),
    })
}

fn render(template: &str, values: &[&str]) -> String {
    let mut values = values.iter();
    segments(template)
        .map(|s| match s {
            Segment::Literal(l) => l,
            Segment::Variable | Segment::Rest => values.next().copied().unwrap_or_default(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

macro_rules! resource_name {
    ($(#[$meta:meta])* $name:ident, $template:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            $($field: String,)+
        }

        impl $name {
            /// The template matched by this resource name.
            pub const TEMPLATE: &'static str = $template;

            /// Creates a new name from its segments.
            ///
            /// The values are not validated. Single-segment variables must
            /// not contain `/`, this is checked with a debug assertion.
            pub fn new($($field: impl Into<String>),+) -> Self {
                let name = Self { $($field: $field.into(),)+ };
                debug_assert!(
                    single_segments(Self::TEMPLATE, &[$(name.$field.as_str()),+]),
                    "{name:?} has a `/` in a single-segment variable of {}",
                    Self::TEMPLATE
                );
                name
            }

            $(
                #[doc = concat!("The `", stringify!($field), "` segment.")]
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )+

            /// Parses `name`, which must match [Self::TEMPLATE].
            pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
                let values = match_template(Self::TEMPLATE, name)
                    .ok_or_else(|| ResourceNameError::invalid(name, Self::TEMPLATE))?;
                let mut values = values.into_iter();
                Ok(Self {
                    $($field: values.next().unwrap_or_default().to_string(),)+
                })
            }

            /// Parses `name`, returning `None` if it is empty.
            pub fn parse_optional(name: &str) -> Result<Option<Self>, ResourceNameError> {
                if name.is_empty() {
                    return Ok(None);
                }
                Self::parse(name).map(Some)
            }

            /// Returns true if `name` matches [Self::TEMPLATE].
            pub fn is_parsable_from(name: &str) -> bool {
                match_template(Self::TEMPLATE, name).is_some()
            }

            /// Parses all of `names`, failing on the first mismatch.
            pub fn parse_list(names: &[&str]) -> Result<Vec<Self>, ResourceNameError> {
                names.iter().map(|n| Self::parse(n)).collect()
            }

            /// Formats all of `values`.
            pub fn to_string_list(values: &[Self]) -> Vec<String> {
                values.iter().map(Self::to_string).collect()
            }

            /// The segment values, keyed by the template variable names.
            pub fn field_values(&self) -> BTreeMap<&'static str, &str> {
                BTreeMap::from([$((stringify!($field), self.$field.as_str()),)+])
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&render(Self::TEMPLATE, &[$(self.$field.as_str()),+]))
            }
        }

        impl std::str::FromStr for $name {
            type Err = ResourceNameError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

resource_name!(
    /// The name of a bucket.
    BucketName,
    "projects/{project}/buckets/{bucket}",
    [project, bucket]
);

resource_name!(
    /// The name of a Pub/Sub notification configuration for a bucket.
    NotificationConfigName,
    "projects/{project}/buckets/{bucket}/notificationConfigs/{notification_config}",
    [project, bucket, notification_config]
);

resource_name!(
    /// The name of a folder in a bucket with hierarchical namespace enabled.
    ///
    /// The `folder` segment may contain `/`, and usually ends with one.
    FolderName,
    "projects/{project}/buckets/{bucket}/folders/{folder=**}",
    [project, bucket, folder]
);

resource_name!(
    /// The name of a managed folder.
    ManagedFolderName,
    "projects/{project}/buckets/{bucket}/managedFolders/{managed_folder=**}",
    [project, bucket, managed_folder]
);

resource_name!(
    /// The name of an Anywhere Cache instance.
    AnywhereCacheName,
    "projects/{project}/buckets/{bucket}/anywhereCaches/{anywhere_cache}",
    [project, bucket, anywhere_cache]
);

resource_name!(
    /// The name of the storage layout of a bucket.
    StorageLayoutName,
    "projects/{project}/buckets/{bucket}/storageLayout",
    [project, bucket]
);

/// The name of an `IntelligenceConfig` singleton.
///
/// The singletons exist for folders, organizations, and projects. Parsing
/// tries the templates in that order, and the variant records which one
/// matched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum IntelligenceConfigName {
    Folder { folder: String, location: String },
    Organization { org: String, location: String },
    Project { project: String, location: String },
}

impl IntelligenceConfigName {
    pub const FOLDER_TEMPLATE: &'static str =
        "folders/{folder}/locations/{location}/intelligenceConfig";
    pub const ORGANIZATION_TEMPLATE: &'static str =
        "organizations/{org}/locations/{location}/intelligenceConfig";
    pub const PROJECT_TEMPLATE: &'static str =
        "projects/{project}/locations/{location}/intelligenceConfig";

    const ANY_TEMPLATE: &'static str =
        "(folders|organizations|projects)/*/locations/*/intelligenceConfig";

    pub fn folder(folder: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Folder {
            folder: folder.into(),
            location: location.into(),
        }
        .checked()
    }

    pub fn organization(org: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Organization {
            org: org.into(),
            location: location.into(),
        }
        .checked()
    }

    pub fn project(project: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Project {
            project: project.into(),
            location: location.into(),
        }
        .checked()
    }

    fn checked(self) -> Self {
        debug_assert!(
            self.segments().iter().all(|v| !v.contains('/')),
            "{self:?} has a `/` in a segment"
        );
        self
    }

    fn segments(&self) -> [&str; 2] {
        match self {
            Self::Folder { folder: id, location }
            | Self::Organization { org: id, location }
            | Self::Project { project: id, location } => [id.as_str(), location.as_str()],
        }
    }

    /// The `location` segment, common to all the templates.
    pub fn location(&self) -> &str {
        match self {
            Self::Folder { location, .. }
            | Self::Organization { location, .. }
            | Self::Project { location, .. } => location,
        }
    }

    /// The template matching this name.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Folder { .. } => Self::FOLDER_TEMPLATE,
            Self::Organization { .. } => Self::ORGANIZATION_TEMPLATE,
            Self::Project { .. } => Self::PROJECT_TEMPLATE,
        }
    }

    pub fn parse(name: &str) -> Result<Self, ResourceNameError> {
        let pair = |template| match match_template(template, name)?.as_slice() {
            [a, b] => Some((a.to_string(), b.to_string())),
            _ => None,
        };
        if let Some((folder, location)) = pair(Self::FOLDER_TEMPLATE) {
            return Ok(Self::Folder { folder, location });
        }
        if let Some((org, location)) = pair(Self::ORGANIZATION_TEMPLATE) {
            return Ok(Self::Organization { org, location });
        }
        if let Some((project, location)) = pair(Self::PROJECT_TEMPLATE) {
            return Ok(Self::Project { project, location });
        }
        Err(ResourceNameError::invalid(name, Self::ANY_TEMPLATE))
    }

    /// Parses `name`, returning `None` if it is empty.
    pub fn parse_optional(name: &str) -> Result<Option<Self>, ResourceNameError> {
        if name.is_empty() {
            return Ok(None);
        }
        Self::parse(name).map(Some)
    }

    pub fn is_parsable_from(name: &str) -> bool {
        Self::parse(name).is_ok()
    }

    pub fn parse_list(names: &[&str]) -> Result<Vec<Self>, ResourceNameError> {
        names.iter().map(|n| Self::parse(n)).collect()
    }

    pub fn to_string_list(values: &[Self]) -> Vec<String> {
        values.iter().map(Self::to_string).collect()
    }

    pub fn field_values(&self) -> BTreeMap<&'static str, &str> {
        match self {
            Self::Folder { folder, location } => {
                BTreeMap::from([("folder", folder.as_str()), ("location", location.as_str())])
            }
            Self::Organization { org, location } => {
                BTreeMap::from([("org", org.as_str()), ("location", location.as_str())])
            }
            Self::Project { project, location } => {
                BTreeMap::from([("project", project.as_str()), ("location", location.as_str())])
            }
        }
    }
}

impl std::fmt::Display for IntelligenceConfigName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self.template(), &self.segments()))
    }
}

impl std::str::FromStr for IntelligenceConfigName {
    type Err = ResourceNameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn bucket() -> anyhow::Result<()> {
        let name = BucketName::parse("projects/_/buckets/my-bucket")?;
        assert_eq!(name.project(), "_");
        assert_eq!(name.bucket(), "my-bucket");
        assert_eq!(name, BucketName::new("_", "my-bucket"));
        assert_eq!(name.to_string(), "projects/_/buckets/my-bucket");
        assert_eq!(
            name.field_values(),
            BTreeMap::from([("project", "_"), ("bucket", "my-bucket")])
        );
        let parsed: BucketName = "projects/p/buckets/b".parse()?;
        assert_eq!(parsed, BucketName::new("p", "b"));
        Ok(())
    }

    #[test_case("projects/_/buckets/"; "empty bucket")]
    #[test_case("projects//buckets/b"; "empty project")]
    #[test_case("projects/_/buckets/b/extra"; "trailing segment")]
    #[test_case("projects/_/bucket/b"; "wrong literal")]
    #[test_case("projects/_"; "too short")]
    fn bucket_mismatch(input: &str) {
        assert!(!BucketName::is_parsable_from(input), "{input}");
        let got = BucketName::parse(input);
        assert!(
            matches!(&got, Err(ResourceNameError::InvalidFormat { name, template })
                if name == input && *template == BucketName::TEMPLATE),
            "{got:?}"
        );
    }

    #[test_case("projects/_/buckets/b/folders/a/", "a/")]
    #[test_case("projects/_/buckets/b/folders/a/b/c/", "a/b/c/")]
    #[test_case("projects/_/buckets/b/folders/a", "a")]
    fn folder(input: &str, want: &str) -> anyhow::Result<()> {
        let name = FolderName::parse(input)?;
        assert_eq!(name.folder(), want);
        assert_eq!(name.bucket(), "b");
        assert_eq!(name.to_string(), input);
        Ok(())
    }

    #[test]
    fn folder_requires_value() {
        assert!(!FolderName::is_parsable_from("projects/_/buckets/b/folders/"));
        assert!(!FolderName::is_parsable_from("projects/_/buckets/b/folders"));
        assert!(!FolderName::is_parsable_from("projects/_/buckets/b/folders//"));
        assert!(!FolderName::is_parsable_from("projects/_/buckets/b/folders/a//b"));
        assert!(!FolderName::is_parsable_from("projects/_/buckets/b/folders//a/"));
        assert!(!ManagedFolderName::is_parsable_from("projects/_/buckets/b/managedFolders/x//"));
    }

    #[test_case("a"; "single")]
    #[test_case("a/"; "trailing slash")]
    #[test_case("a/b/c/"; "nested")]
    #[test_case("a/b"; "no trailing slash")]
    fn folder_segments(folder: &str) -> anyhow::Result<()> {
        let input = format!("projects/_/buckets/b/folders/{folder}");
        let name = FolderName::parse(&input)?;
        assert_eq!(name.folder(), folder);
        assert_eq!(name.to_string(), input);
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "single-segment variable")]
    fn new_with_slash_in_segment() {
        let _ = BucketName::new("_", "a/b");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "has a `/` in a segment")]
    fn intelligence_config_with_slash_in_segment() {
        let _ = IntelligenceConfigName::project("p/q", "global");
    }

    #[test]
    fn new_with_slash_in_rest() {
        let name = FolderName::new("_", "b", "a/b/");
        assert_eq!(name.to_string(), "projects/_/buckets/b/folders/a/b/");
        assert!(single_segments(FolderName::TEMPLATE, &["_", "b", "a/b/"]));
        assert!(!single_segments(FolderName::TEMPLATE, &["_", "b/c", "a/"]));
    }

    #[test]
    fn managed_folder() -> anyhow::Result<()> {
        let name = ManagedFolderName::parse("projects/_/buckets/b/managedFolders/x/y/")?;
        assert_eq!(name.managed_folder(), "x/y/");
        assert_eq!(
            name,
            ManagedFolderName::new("_", "b", "x/y/")
        );
        Ok(())
    }

    #[test]
    fn other_names() -> anyhow::Result<()> {
        let name = AnywhereCacheName::parse("projects/_/buckets/b/anywhereCaches/us-central1-a")?;
        assert_eq!(name.anywhere_cache(), "us-central1-a");
        let name = StorageLayoutName::parse("projects/_/buckets/b/storageLayout")?;
        assert_eq!(name.bucket(), "b");
        assert!(!StorageLayoutName::is_parsable_from("projects/_/buckets/b/storageLayout/x"));
        let name = NotificationConfigName::parse("projects/p/buckets/b/notificationConfigs/n")?;
        assert_eq!(name.notification_config(), "n");
        Ok(())
    }

    #[test]
    fn optional_and_lists() -> anyhow::Result<()> {
        assert_eq!(BucketName::parse_optional("")?, None);
        assert_eq!(
            BucketName::parse_optional("projects/p/buckets/b")?,
            Some(BucketName::new("p", "b"))
        );
        assert!(BucketName::parse_optional("invalid").is_err());

        let names = BucketName::parse_list(&["projects/p/buckets/a", "projects/p/buckets/b"])?;
        assert_eq!(
            BucketName::to_string_list(&names),
            vec!["projects/p/buckets/a", "projects/p/buckets/b"]
        );
        assert!(BucketName::parse_list(&["projects/p/buckets/a", "bad"]).is_err());
        Ok(())
    }

    #[test_case("folders/123/locations/global/intelligenceConfig", IntelligenceConfigName::folder("123", "global"))]
    #[test_case("organizations/456/locations/global/intelligenceConfig", IntelligenceConfigName::organization("456", "global"))]
    #[test_case("projects/my-project/locations/us/intelligenceConfig", IntelligenceConfigName::project("my-project", "us"))]
    fn intelligence_config(input: &str, want: IntelligenceConfigName) -> anyhow::Result<()> {
        let got = IntelligenceConfigName::parse(input)?;
        assert_eq!(got, want);
        assert_eq!(got.to_string(), input);
        assert!(IntelligenceConfigName::is_parsable_from(input));
        Ok(())
    }

    #[test]
    fn intelligence_config_field_values() -> anyhow::Result<()> {
        let got = IntelligenceConfigName::parse("projects/p/locations/global/intelligenceConfig")?;
        assert_eq!(got.location(), "global");
        assert_eq!(
            got.field_values(),
            BTreeMap::from([("project", "p"), ("location", "global")])
        );
        Ok(())
    }

    #[test_case("projects/p/locations/global"; "missing literal")]
    #[test_case("buckets/b/locations/global/intelligenceConfig"; "unknown parent")]
    #[test_case("projects//locations/global/intelligenceConfig"; "empty project")]
    fn intelligence_config_mismatch(input: &str) {
        assert!(!IntelligenceConfigName::is_parsable_from(input), "{input}");
        let got = IntelligenceConfigName::parse(input);
        assert!(
            matches!(got, Err(ResourceNameError::InvalidFormat { .. })),
            "{got:?}"
        );
    }
}
