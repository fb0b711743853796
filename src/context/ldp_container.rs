//! LDP membership triples
//!
//! Direct and indirect containers name a membership resource through
//! `ldp:membershipResource`. When that resource is projected, every such
//! container contributes one membership triple per member it holds:
//!
//! - the predicate is the container's `ldp:hasMemberRelation`, or
//!   `ldp:member` for a container also tagged as a basic container;
//! - the object is the member itself (`ldp:MemberSubject`, the default),
//!   or for an indirect container the values of the member's property named
//!   by `ldp:insertedContentRelation`.
//!
//! Containers without a member relation, and indirect containers without an
//! inserted content relation, contribute nothing.

use super::stream::TripleStream;
use super::value::ValueConverter;
use super::RdfContext;
use crate::error::{ProjectionError, ProjectionResult};
use crate::graph::{
    tags, types::has_tag, ContainerKind, PropertyValues, Reference, ResourceId, ResourceKind,
    ResourceModel, HAS_MEMBER_RELATION, INSERTED_CONTENT_RELATION, MEMBERSHIP_RESOURCE,
};
use crate::identifier::IdentifierTranslator;
use crate::rdf::{vocab, NamedNode, NamespaceRegistry, RdfObject, RdfPredicate, Triple};
use serde::{Deserialize, Serialize};
use std::vec;
use tracing::debug;

/// Which IRI membership triples are asserted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipSubject {
    /// The projected topic, i.e. the container's membership resource
    #[default]
    MembershipResource,
    /// The container itself
    Container,
}

/// Derives LDP membership triples for the containers pointing at a topic
pub struct LdpContainerRdfContext<'m, M: ResourceModel + ?Sized> {
    model: &'m M,
    namespaces: &'m NamespaceRegistry,
    subject: MembershipSubject,
}

/// Where a container's membership objects come from
#[derive(Debug, Clone, PartialEq)]
enum Insertion {
    /// The member's own IRI
    MemberSubject,
    /// Values of this local property on the member
    Property(String),
}

/// Resolved configuration of one container, plus its unvisited members
struct Membership {
    container: ResourceId,
    subject: NamedNode,
    predicate: RdfPredicate,
    insertion: Insertion,
    children: vec::IntoIter<ResourceId>,
    pending: vec::IntoIter<RdfObject>,
}

impl Membership {
    fn triple(&self, object: RdfObject) -> Triple {
        Triple::new(self.subject.clone(), self.predicate.clone(), object)
    }
}

impl<'m, M: ResourceModel + ?Sized> LdpContainerRdfContext<'m, M> {
    pub fn new(model: &'m M, namespaces: &'m NamespaceRegistry) -> Self {
        Self {
            model,
            namespaces,
            subject: MembershipSubject::default(),
        }
    }

    pub fn with_subject(mut self, subject: MembershipSubject) -> Self {
        self.subject = subject;
        self
    }

    /// Membership triples contributed by the containers referencing `resource`
    pub fn memberships<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> MembershipTriples<'a, 'm, M> {
        MembershipTriples {
            context: self,
            topic: resource,
            translator,
            references: None,
            current: None,
            done: false,
        }
    }

    /// Resolve a referencing container, `None` when it contributes nothing
    fn membership(
        &self,
        topic: &ResourceId,
        reference: &Reference,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Option<Membership>> {
        let container = &reference.origin;
        let type_tags = self.model.type_tags(container)?;
        let kind = ResourceKind::classify(&type_tags);
        if !kind.is_membership_container() {
            return Ok(None);
        }

        let predicate = match self.model.property(container, HAS_MEMBER_RELATION)? {
            Some(values) => RdfPredicate::from(iri_value(container, HAS_MEMBER_RELATION, &values)?),
            None if has_tag(&type_tags, tags::BASIC_CONTAINER) => vocab::predicate(vocab::LDP_MEMBER),
            None => {
                debug!("Container {} has no member relation, skipping", container);
                return Ok(None);
            }
        };

        let inserted = if kind == ResourceKind::Container(ContainerKind::Indirect) {
            match self.model.property(container, INSERTED_CONTENT_RELATION)? {
                Some(values) => iri_value(container, INSERTED_CONTENT_RELATION, &values)?,
                None => {
                    debug!(
                        "Indirect container {} has no inserted content relation, skipping",
                        container
                    );
                    return Ok(None);
                }
            }
        } else {
            vocab::node(vocab::LDP_MEMBER_SUBJECT)
        };
        debug!("Using inserted container property: {}", inserted);

        let insertion = if inserted.as_str() == vocab::LDP_MEMBER_SUBJECT {
            Insertion::MemberSubject
        } else {
            Insertion::Property(self.namespaces.resolve_local_property_name(&inserted))
        };

        let subject_id = match self.subject {
            MembershipSubject::MembershipResource => topic,
            MembershipSubject::Container => container,
        };
        Ok(Some(Membership {
            container: container.clone(),
            subject: translator.forward(subject_id)?,
            predicate,
            insertion,
            children: self.model.children(container)?.into_iter(),
            pending: Vec::new().into_iter(),
        }))
    }

    /// Membership objects contributed by one child of a container
    fn member_objects(
        &self,
        insertion: &Insertion,
        child: &ResourceId,
        translator: &dyn IdentifierTranslator,
    ) -> ProjectionResult<Vec<RdfObject>> {
        // A description stands in for its binary
        let member = match self.model.kind(child)? {
            ResourceKind::BinaryDescription => self
                .model
                .described_binary_of(child)?
                .unwrap_or_else(|| child.clone()),
            _ => child.clone(),
        };

        let property = match insertion {
            Insertion::MemberSubject => {
                let subject = translator.forward(&member)?;
                debug!("Operating over child resource: {}", subject);
                return Ok(vec![subject.into()]);
            }
            Insertion::Property(property) => property,
        };

        // Read from the child as listed, not from the binary it stands for
        debug!("Looking for inserted content property: {}", property);
        let (name, values) = if let Some(values) = self.model.property(child, property)? {
            debug!("Using property {} directly.", property);
            (property.clone(), values)
        } else {
            let variant = self.namespaces.reference_variant_name(property);
            match self.model.property(child, &variant)? {
                Some(values) => {
                    debug!("Using property {} via reference.", variant);
                    (variant, values)
                }
                None => {
                    debug!("No property {} found directly or via reference.", property);
                    return Ok(Vec::new());
                }
            }
        };

        ValueConverter::new(translator, child, &name).convert_all(&values)
    }
}

impl<'m, M: ResourceModel + ?Sized> RdfContext for LdpContainerRdfContext<'m, M> {
    fn name(&self) -> &'static str {
        "ldp_container"
    }

    fn triples_for<'a>(
        &'a self,
        resource: &'a ResourceId,
        translator: &'a dyn IdentifierTranslator,
    ) -> TripleStream<'a> {
        Box::new(self.memberships(resource, translator))
    }
}

/// Pull-based membership derivation
///
/// Holds at most one container's child list and one child's values at a
/// time. Order: containers in reference order, then children in their
/// natural order, then values in stored order.
pub struct MembershipTriples<'a, 'm, M: ResourceModel + ?Sized> {
    context: &'a LdpContainerRdfContext<'m, M>,
    topic: &'a ResourceId,
    translator: &'a dyn IdentifierTranslator,
    references: Option<vec::IntoIter<Reference>>,
    current: Option<Membership>,
    done: bool,
}

impl<'a, 'm, M: ResourceModel + ?Sized> MembershipTriples<'a, 'm, M> {
    fn advance(&mut self) -> ProjectionResult<Option<Triple>> {
        if self.references.is_none() {
            let references = self
                .context
                .model
                .incoming_references(self.topic, MEMBERSHIP_RESOURCE)?;
            self.references = Some(references.into_iter());
        }

        loop {
            if let Some(membership) = self.current.as_mut() {
                if let Some(object) = membership.pending.next() {
                    return Ok(Some(membership.triple(object)));
                }
                if let Some(child) = membership.children.next() {
                    let objects =
                        self.context
                            .member_objects(&membership.insertion, &child, self.translator)?;
                    membership.pending = objects.into_iter();
                    continue;
                }
                debug!("Finished members of {}", membership.container);
                self.current = None;
            }

            let Some(reference) = self.references.as_mut().and_then(|refs| refs.next()) else {
                return Ok(None);
            };
            self.current = self
                .context
                .membership(self.topic, &reference, self.translator)?;
        }
    }
}

impl<'a, 'm, M: ResourceModel + ?Sized> Iterator for MembershipTriples<'a, 'm, M> {
    type Item = ProjectionResult<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(triple)) => Some(Ok(triple)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Single IRI held by a configuration property
fn iri_value(
    container: &ResourceId,
    property: &str,
    values: &PropertyValues,
) -> ProjectionResult<NamedNode> {
    let [value] = values.as_slice() else {
        return Err(ProjectionError::malformed(
            container,
            property,
            format!("expected a single IRI, found {} values", values.len()),
        ));
    };
    let iri = value.as_str().ok_or_else(|| {
        ProjectionError::malformed(
            container,
            property,
            format!("expected an IRI string, found {}", value.type_name()),
        )
    })?;
    NamedNode::new(iri).map_err(|e| ProjectionError::malformed(container, property, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{PropertyValue, RepositoryError, ResourceStore};
    use crate::identifier::BaseUriTranslator;

    const BASE: &str = "http://localhost/rest";

    fn translator() -> BaseUriTranslator {
        BaseUriTranslator::new(BASE).unwrap()
    }

    fn uri(iri: &str) -> PropertyValues {
        vec![PropertyValue::Uri(iri.to_string())]
    }

    /// Container at `path` whose membership resource is itself
    fn container(store: &mut ResourceStore, path: &str, tags: &[&str]) -> ResourceId {
        let id = store.create_resource(path, tags.iter().copied()).unwrap();
        store
            .set_property(&id, MEMBERSHIP_RESOURCE, vec![id.clone().into()])
            .unwrap();
        id
    }

    fn project(store: &ResourceStore, topic: &ResourceId) -> Vec<String> {
        try_project(store, topic).unwrap()
    }

    fn try_project(store: &ResourceStore, topic: &ResourceId) -> ProjectionResult<Vec<String>> {
        let translator = translator();
        let context = LdpContainerRdfContext::new(store, store.namespaces());
        context
            .triples_for(topic, &translator)
            .map(|t| t.map(|t| t.to_string()))
            .collect()
    }

    #[test]
    fn test_direct_container_with_relation() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["direct-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/contains"))
            .unwrap();
        store.create_resource("/members/x", ["container"]).unwrap();

        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://example.org/contains> <http://localhost/rest/members/x> ."]
        );
    }

    #[test]
    fn test_basic_tag_defaults_to_ldp_member() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["direct-container", "basic-container"]);
        store.create_resource("/members/x", ["container"]).unwrap();

        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://www.w3.org/ns/ldp#member> <http://localhost/rest/members/x> ."]
        );
    }

    #[test]
    fn test_no_member_relation_is_skipped() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["direct-container"]);
        store.create_resource("/members/x", ["container"]).unwrap();

        assert!(project(&store, &members).is_empty());
    }

    #[test]
    fn test_basic_container_reference_is_ignored() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["basic-container"]);
        store.create_resource("/members/x", ["container"]).unwrap();

        assert!(project(&store, &members).is_empty());
    }

    #[test]
    fn test_membership_resource_elsewhere() {
        let mut store = ResourceStore::new();
        let target = store.create_resource("/target", ["container"]).unwrap();
        let members = store.create_resource("/members", ["direct-container"]).unwrap();
        store
            .set_property(&members, MEMBERSHIP_RESOURCE, vec![target.clone().into()])
            .unwrap();
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/hasPart"))
            .unwrap();
        store.create_resource("/members/x", ["container"]).unwrap();

        assert_eq!(
            project(&store, &target),
            vec!["<http://localhost/rest/target> <http://example.org/hasPart> <http://localhost/rest/members/x> ."]
        );
        // The container itself is not its membership resource
        assert!(project(&store, &members).is_empty());

        let translator = translator();
        let context = LdpContainerRdfContext::new(&store, store.namespaces())
            .with_subject(MembershipSubject::Container);
        let triples: Vec<_> = context
            .triples_for(&target, &translator)
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(triples[0].subject.as_str(), "http://localhost/rest/members");
    }

    #[test]
    fn test_description_child_points_at_binary() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["direct-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/contains"))
            .unwrap();
        let description = store
            .create_resource("/members/meta", ["binary-description"])
            .unwrap();
        let binary = store.create_resource("/members/meta/file", ["binary"]).unwrap();
        store.pair_binary(&binary, &description).unwrap();

        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://example.org/contains> <http://localhost/rest/members/meta/file> ."]
        );
    }

    #[test]
    fn test_indirect_description_child_reads_its_own_property() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["indirect-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/ns#hasTitle"))
            .unwrap();
        store
            .set_property(
                &members,
                INSERTED_CONTENT_RELATION,
                uri("http://purl.org/dc/terms/title"),
            )
            .unwrap();
        let description = store
            .create_resource("/members/meta", ["binary-description"])
            .unwrap();
        let binary = store.create_resource("/members/meta/file", ["binary"]).unwrap();
        store.pair_binary(&binary, &description).unwrap();
        store
            .set_property(&description, "dcterms:title", vec!["scan".into()])
            .unwrap();

        assert!(!store.has_property(&binary, "dcterms:title").unwrap());
        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://example.org/ns#hasTitle> \"scan\" ."]
        );
    }

    #[test]
    fn test_indirect_container_uses_inserted_property() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["indirect-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/ns#hasTitle"))
            .unwrap();
        store
            .set_property(
                &members,
                INSERTED_CONTENT_RELATION,
                uri("http://purl.org/dc/terms/title"),
            )
            .unwrap();
        let x = store.create_resource("/members/x", ["container"]).unwrap();
        store.set_property(&x, "dcterms:title", vec!["foo".into()]).unwrap();
        let y = store.create_resource("/members/y", ["container"]).unwrap();
        store
            .set_property(&y, "dcterms:title", vec!["bar".into(), "baz".into()])
            .unwrap();
        store.create_resource("/members/z", ["container"]).unwrap();

        assert_eq!(
            project(&store, &members),
            vec![
                "<http://localhost/rest/members> <http://example.org/ns#hasTitle> \"foo\" .",
                "<http://localhost/rest/members> <http://example.org/ns#hasTitle> \"bar\" .",
                "<http://localhost/rest/members> <http://example.org/ns#hasTitle> \"baz\" .",
            ]
        );
    }

    #[test]
    fn test_indirect_container_falls_back_to_reference_variant() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["indirect-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/ns#about"))
            .unwrap();
        store
            .set_property(
                &members,
                INSERTED_CONTENT_RELATION,
                uri("http://example.org/ns#subject"),
            )
            .unwrap();
        let topic = store.create_resource("/topic", ["container"]).unwrap();
        let x = store.create_resource("/members/x", ["container"]).unwrap();
        store
            .set_property(
                &x,
                "{http://example.org/ns#}subject_ref",
                vec![topic.clone().into()],
            )
            .unwrap();

        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://example.org/ns#about> <http://localhost/rest/topic> ."]
        );
    }

    #[test]
    fn test_indirect_container_without_inserted_relation() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["indirect-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/ns#about"))
            .unwrap();
        let x = store.create_resource("/members/x", ["container"]).unwrap();
        store.set_property(&x, "dcterms:title", vec!["foo".into()]).unwrap();

        assert!(project(&store, &members).is_empty());
    }

    #[test]
    fn test_indirect_container_with_member_subject() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["indirect-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, uri("http://example.org/ns#about"))
            .unwrap();
        store
            .set_property(&members, INSERTED_CONTENT_RELATION, uri(vocab::LDP_MEMBER_SUBJECT))
            .unwrap();
        store.create_resource("/members/x", ["container"]).unwrap();

        assert_eq!(
            project(&store, &members),
            vec!["<http://localhost/rest/members> <http://example.org/ns#about> <http://localhost/rest/members/x> ."]
        );
    }

    #[test]
    fn test_containers_in_reference_order() {
        let mut store = ResourceStore::new();
        let target = store.create_resource("/target", ["container"]).unwrap();
        for (path, relation) in [("/b", "http://example.org/b"), ("/a", "http://example.org/a")] {
            let id = store.create_resource(path, ["direct-container"]).unwrap();
            store
                .set_property(&id, MEMBERSHIP_RESOURCE, vec![target.clone().into()])
                .unwrap();
            store.set_property(&id, HAS_MEMBER_RELATION, uri(relation)).unwrap();
            store
                .create_resource(&format!("{}/child", path), ["container"])
                .unwrap();
        }

        assert_eq!(
            project(&store, &target),
            vec![
                "<http://localhost/rest/target> <http://example.org/b> <http://localhost/rest/b/child> .",
                "<http://localhost/rest/target> <http://example.org/a> <http://localhost/rest/a/child> .",
            ]
        );
    }

    #[test]
    fn test_malformed_member_relation() {
        let mut store = ResourceStore::new();
        let members = container(&mut store, "/members", &["direct-container"]);
        store
            .set_property(&members, HAS_MEMBER_RELATION, vec![PropertyValue::Integer(3)])
            .unwrap();
        store.create_resource("/members/x", ["container"]).unwrap();

        assert!(matches!(
            try_project(&store, &members),
            Err(ProjectionError::MalformedPropertyValue { .. })
        ));

        store
            .set_property(
                &members,
                HAS_MEMBER_RELATION,
                vec![
                    PropertyValue::Uri("http://example.org/a".into()),
                    PropertyValue::Uri("http://example.org/b".into()),
                ],
            )
            .unwrap();
        assert!(matches!(
            try_project(&store, &members),
            Err(ProjectionError::MalformedPropertyValue { .. })
        ));
    }

    #[test]
    fn test_missing_topic_fails() {
        let store = ResourceStore::new();
        let missing = ResourceId::new("/missing").unwrap();
        assert_eq!(
            try_project(&store, &missing),
            Err(ProjectionError::RepositoryAccess(
                RepositoryError::ResourceNotFound(missing.clone())
            ))
        );
    }

    #[test]
    fn test_iri_value() {
        let id = ResourceId::root();
        assert_eq!(
            iri_value(&id, "p", &uri("http://example.org/a")).unwrap().as_str(),
            "http://example.org/a"
        );
        assert!(iri_value(&id, "p", &vec!["http://example.org/a".into()]).is_ok());
        assert!(iri_value(&id, "p", &Vec::new()).is_err());
        assert!(iri_value(&id, "p", &uri("no iri")).is_err());
    }
}
