//! Record-to-graph conversion

use tracing::{debug, span, warn, Level};

use super::records::{NetworkData, Person, Startup};
use crate::core::{Database, EdgeData, Graph, NodeData, Result};

/// Outcome of building a graph from network records
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub graph: Graph,
    /// Relationships dropped because an endpoint id was empty
    pub dropped_relationships: usize,
}

fn person_node(person: &Person) -> NodeData {
    let mut node = NodeData::person(&person.id, &person.name);
    if let Some(role) = &person.role {
        node = node.with_role(role);
    }
    if person.is_founder.unwrap_or(false) {
        node = node.anchored();
    }
    let extras = [
        ("sisterOrgs", &person.sister_orgs),
        ("interests", &person.interests),
        ("linkedinWebsite", &person.linkedin_website),
        ("notes", &person.notes),
    ];
    for (key, value) in extras {
        if let Some(value) = value {
            node = node.with_attribute(key, value);
        }
    }
    node
}

fn startup_node(startup: &Startup) -> NodeData {
    let mut node = NodeData::organization(&startup.id, &startup.name);
    let extras = [
        ("url", &startup.url),
        ("domain", &startup.domain),
        ("status", &startup.status),
        ("notes", &startup.notes),
    ];
    for (key, value) in extras {
        if let Some(value) = value {
            node = node.with_attribute(key, value);
        }
    }
    node
}

impl NetworkData {
    /// Build the layout graph: people first, then startups, then one edge
    /// per complete relationship (person to startup, labelled with the role)
    ///
    /// Fails with [`LayoutError::DuplicateNode`](crate::core::LayoutError)
    /// if an id repeats across people and startups. Relationships that point
    /// at ids missing from the records are kept; layout skips them.
    pub fn to_graph(&self) -> Result<BuildReport> {
        let span = span!(
            Level::DEBUG,
            "build_graph",
            people = self.people.len(),
            startups = self.startups.len(),
            relationships = self.relationships.len()
        );
        let _enter = span.enter();

        let mut graph = Graph::new();
        for person in &self.people {
            graph.add_node(person_node(person))?;
        }
        for startup in &self.startups {
            graph.add_node(startup_node(startup))?;
        }

        let mut dropped_relationships = 0;
        for relationship in &self.relationships {
            if !relationship.is_complete() {
                dropped_relationships += 1;
                continue;
            }
            graph.add_edge(EdgeData::with_label(
                &relationship.person_id,
                &relationship.startup_id,
                &relationship.role,
            ))?;
        }

        if dropped_relationships > 0 {
            warn!(
                dropped = dropped_relationships,
                "Dropped relationships with an empty endpoint"
            );
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built network graph"
        );

        Ok(BuildReport {
            graph,
            dropped_relationships,
        })
    }
}
