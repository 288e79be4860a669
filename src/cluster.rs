/*
 * Copyright 2024 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Classification of requested resource names into backend targets.

/// Substring marking a resource name as a Cloud Map service id rather than
/// an ECS cluster name.
pub const CATALOG_MARKER: &str = "srv-";

/// A requested cluster identifier, classified once at the protocol boundary
/// and dispatched on thereafter.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ClusterId {
    /// An ECS cluster whose running tasks make up the endpoint set.
    TaskCluster(String),
    /// A Cloud Map service whose registered instances make up the endpoint
    /// set.
    CatalogService(String),
}

impl ClusterId {
    /// Classifies `name`: identifiers containing [`CATALOG_MARKER`] denote
    /// Cloud Map services, everything else an ECS cluster.
    pub fn classify(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.contains(CATALOG_MARKER) {
            Self::CatalogService(name)
        } else {
            Self::TaskCluster(name)
        }
    }

    /// The raw identifier as the client requested it.
    pub fn name(&self) -> &str {
        match self {
            Self::TaskCluster(name) | Self::CatalogService(name) => name,
        }
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(
            ClusterId::classify("srv-qp3a4lugw4s5ei3a"),
            ClusterId::CatalogService("srv-qp3a4lugw4s5ei3a".into())
        );
        // The marker counts anywhere in the name, not only as a prefix.
        assert_eq!(
            ClusterId::classify("edge-srv-cache"),
            ClusterId::CatalogService("edge-srv-cache".into())
        );
        assert_eq!(
            ClusterId::classify("task-cluster-A"),
            ClusterId::TaskCluster("task-cluster-A".into())
        );
        assert_eq!(
            ClusterId::classify("srv"),
            ClusterId::TaskCluster("srv".into())
        );
    }

    #[test]
    fn name_is_preserved() {
        for name in ["srv-abc123", "payments"] {
            assert_eq!(ClusterId::classify(name).name(), name);
        }
    }
}
