//! Category grouping for the explore view tabs.

use serde::{Deserialize, Serialize};

use super::model::Resource;

/// Resources sharing one category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category name.
    pub name: String,
    /// Member resources in feed order.
    pub resources: Vec<Resource>,
}

impl CategoryGroup {
    /// Group `feed` by category name.
    ///
    /// Names are unique and ordered by first occurrence in the feed.
    /// Resources without a category are left out of every group.
    pub fn group(feed: &[Resource]) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for resource in feed {
            let Some(name) = resource.category_name() else {
                continue;
            };

            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.resources.push(resource.clone()),
                None => groups.push(CategoryGroup {
                    name: name.to_string(),
                    resources: vec![resource.clone()],
                }),
            }
        }

        groups
    }

    /// Members whose name matches `query`.
    pub fn filtered<'a>(&'a self, query: &str) -> Vec<&'a Resource> {
        self.resources.iter().filter(|r| r.matches(query)).collect()
    }
}
