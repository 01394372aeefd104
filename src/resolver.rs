//! Reference resolver. Implements the in-place expansion of the `$ref`
//! keyword: after a successful resolve pass every reference that can be
//! materialized in a tree representation is replaced by the keywords of its
//! target, and the remaining ones (reference cycles) are followed by the
//! validation engine at run time.
//!
//! External documents are loaded through a [`Fetcher`], with `file://` and
//! `http(s)://` implementations provided.
use crate::{
    error::SchemaError,
    options::ResolveOptions,
    paths::JSONPointer,
    schemas::{self, SchemaScan},
    uri,
};
use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::io;
use url::Url;

/// A fetcher loads external schema documents.
///
/// All operations are blocking. Callers may inject their own implementation
/// to stub out network access.
///
/// # Example
///
/// ```rust
/// # use serde_json::{json, Value};
/// # use jsonschema_draft4::{Fetcher, SchemaError};
/// # use url::Url;
/// struct StaticFetcher;
///
/// impl Fetcher for StaticFetcher {
///     fn fetch(&self, url: &Url) -> Result<Value, SchemaError> {
///         match url.scheme() {
///             "http" | "https" => Ok(json!({"type": "integer"})),
///             scheme => Err(SchemaError::UnsupportedScheme {
///                 scheme: scheme.to_string(),
///             }),
///         }
///     }
/// }
/// ```
pub trait Fetcher: Send + Sync {
    /// Load the document behind an absolute URI.
    fn fetch(&self, url: &Url) -> Result<Value, SchemaError>;
}

/// The default fetcher reads `file://` documents from the filesystem and
/// `http(s)://` documents over the network. Fetched documents are cached,
/// so a fetcher shared between resolve calls loads each document once.
#[derive(Default)]
pub struct DefaultFetcher {
    store: RwLock<AHashMap<String, Value>>,
}

impl std::fmt::Debug for DefaultFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultFetcher")
            .field("store", &self.store.read().len())
            .finish()
    }
}

impl Fetcher for DefaultFetcher {
    fn fetch(&self, url: &Url) -> Result<Value, SchemaError> {
        if let Some(cached) = self.store.read().get(url.as_str()) {
            return Ok(cached.clone());
        }
        let document: Value = match url.scheme() {
            "file" => {
                let path = url.to_file_path().map_err(|_| SchemaError::File {
                    url: url.to_string(),
                    error: io::Error::new(io::ErrorKind::InvalidInput, "invalid file path"),
                })?;
                let content = std::fs::read_to_string(&path).map_err(|error| SchemaError::File {
                    url: url.to_string(),
                    error,
                })?;
                serde_json::from_str(&content)?
            }
            "http" | "https" => {
                #[cfg(any(feature = "reqwest", test))]
                {
                    let response = reqwest::blocking::get(url.as_str())
                        .and_then(reqwest::blocking::Response::error_for_status)
                        .map_err(|error| SchemaError::Http {
                            url: url.to_string(),
                            error,
                        })?;
                    response.json().map_err(|error| SchemaError::Http {
                        url: url.to_string(),
                        error,
                    })?
                }
                #[cfg(not(any(feature = "reqwest", test)))]
                {
                    return Err(SchemaError::UnsupportedScheme {
                        scheme: url.scheme().to_string(),
                    });
                }
            }
            scheme => {
                return Err(SchemaError::UnsupportedScheme {
                    scheme: scheme.to_string(),
                })
            }
        };
        self.store
            .write()
            .insert(url.to_string(), document.clone());
        Ok(document)
    }
}

/// Expand every `$ref` in `document` in place.
///
/// References that cannot be materialized in a tree representation
/// (reference cycles) are left in place; the validation engine follows them
/// at run time. Resolution errors are fatal and may leave the document
/// partially resolved.
pub fn resolve(document: &mut Value, options: &ResolveOptions) -> Result<(), SchemaError> {
    Resolver::new(options).resolve_document(document, None)
}

/// Where a reference points, before any fetching happened.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RefTarget {
    /// A subtree of the current document, fragment already applied.
    Local(JSONPointer),
    /// Another document.
    Remote {
        uri: String,
        fragment: Option<String>,
    },
}

/// Per-pass analysis of the reference graph: which references take part in
/// a cycle, and which other references sit inside each target subtree.
struct RefGraph {
    cyclic: Vec<bool>,
    /// `contains[i]` lists the indices of the references located inside the
    /// subtree that reference `i` expands to.
    contains: Vec<Vec<usize>>,
}

struct Resolver<'a> {
    options: &'a ResolveOptions,
    /// Documents whose resolution is currently on the stack. A reference
    /// into one of them is a cross-document cycle.
    in_progress: AHashSet<String>,
    /// Fully resolved external documents.
    resolved_store: AHashMap<String, Value>,
}

impl<'a> Resolver<'a> {
    fn new(options: &'a ResolveOptions) -> Resolver<'a> {
        Resolver {
            options,
            in_progress: AHashSet::new(),
            resolved_store: AHashMap::new(),
        }
    }

    /// Materialize references one at a time, innermost first, re-scanning
    /// after every substitution because ids and references may have moved.
    ///
    /// Only references whose target subtree carries no further references
    /// are substituted, so every step removes exactly one reference and the
    /// pass terminates. References that are part of a cycle, or whose
    /// expansion would have to copy one, stay in place for the validation
    /// engine.
    fn resolve_document(
        &mut self,
        document: &mut Value,
        document_uri: Option<&str>,
    ) -> Result<(), SchemaError> {
        let mut leftover: AHashSet<(String, String)> = AHashSet::new();
        loop {
            let scan = schemas::scan(
                document,
                &self.options.id_key,
                &self.options.ref_key,
                &self.options.excluded_data_keys,
            );
            let absolute_ids = absolute_id_map(&scan, document_uri);
            let graph = ref_graph(&scan, &absolute_ids, document_uri);
            let ready = scan.refs.iter().enumerate().find(|(index, (pointer, reference))| {
                !graph.cyclic[*index]
                    && graph.contains[*index].is_empty()
                    && !leftover.contains(&(pointer.to_string(), reference.clone()))
            });
            let (ref_pointer, reference) = match ready {
                Some((_, found)) => found.clone(),
                None => return Ok(()),
            };
            let target = classify_ref(
                &ref_pointer,
                &reference,
                &scan,
                &absolute_ids,
                document_uri,
            )?;
            let content = match target {
                RefTarget::Local(target_pointer) => {
                    let located = target_pointer.follow(document).ok_or_else(|| {
                        SchemaError::RefNotFound {
                            reference: reference.clone(),
                        }
                    })?;
                    located
                        .as_object()
                        .ok_or_else(|| SchemaError::RefNotASchema {
                            reference: reference.clone(),
                        })?
                        .clone()
                }
                RefTarget::Remote { uri, fragment } => {
                    match self.remote_target(&ref_pointer, &uri, fragment.as_deref(), &reference)? {
                        Some(content) => content,
                        None => {
                            leftover.insert((ref_pointer.to_string(), reference));
                            continue;
                        }
                    }
                }
            };
            substitute(document, &ref_pointer, content, &reference)?;
        }
    }

    /// Load and resolve the remote document, apply the fragment and return
    /// the target's keywords. `None` when materializing the target here
    /// would change the meaning of references inside it.
    fn remote_target(
        &mut self,
        ref_pointer: &JSONPointer,
        uri: &str,
        fragment: Option<&str>,
        reference: &str,
    ) -> Result<Option<Map<String, Value>>, SchemaError> {
        if self.in_progress.contains(uri) {
            // cross-document reference cycle
            return Ok(None);
        }
        let document = self.resolve_remote(uri)?;
        let target = match fragment {
            Some(fragment) if !fragment.is_empty() => JSONPointer::parse(fragment)
                .follow(&document)
                .ok_or_else(|| SchemaError::RefNotFound {
                    reference: reference.to_string(),
                })?,
            _ => &document,
        };
        let object = target
            .as_object()
            .ok_or_else(|| SchemaError::RefNotASchema {
                reference: reference.to_string(),
            })?;
        // References surviving the remote document's own resolution are
        // relative to that document. They keep their meaning when the whole
        // document lands at our root, and lose it anywhere else.
        let leftovers = !schemas::scan(
            target,
            &self.options.id_key,
            &self.options.ref_key,
            &self.options.excluded_data_keys,
        )
        .refs
        .is_empty();
        let whole_document_at_root =
            ref_pointer.is_empty() && fragment.map_or(true, str::is_empty);
        if leftovers && !whole_document_at_root {
            return Ok(None);
        }
        Ok(Some(object.clone()))
    }

    fn resolve_remote(&mut self, uri: &str) -> Result<Value, SchemaError> {
        if let Some(document) = self.resolved_store.get(uri) {
            return Ok(document.clone());
        }
        let url = Url::parse(uri)?;
        let mut document =
            if !self.options.download && (url.scheme() == "http" || url.scheme() == "https") {
                // offline mode substitutes an accept-all schema
                Value::Object(Map::new())
            } else {
                self.options.fetcher.fetch(&url)?
            };
        self.in_progress.insert(uri.to_string());
        let result = self.resolve_document(&mut document, Some(uri));
        self.in_progress.remove(uri);
        result?;
        self.resolved_store
            .insert(uri.to_string(), document.clone());
        Ok(document)
    }
}

/// Determine where a reference points. The inline-id shortcut comes first,
/// then canonical URI resolution with in-document ids taking precedence
/// over remote documents.
pub(crate) fn classify_ref(
    ref_pointer: &JSONPointer,
    reference: &str,
    scan: &SchemaScan,
    absolute_ids: &[(JSONPointer, String)],
    document_uri: Option<&str>,
) -> Result<RefTarget, SchemaError> {
    // inline ids are matched verbatim
    if let Some((pointer, _)) = scan.ids.iter().find(|(_, id)| id == reference) {
        return Ok(RefTarget::Local(pointer.clone()));
    }

    let (pre, fragment) = uri::defrag(reference);
    if pre.is_empty() {
        return Ok(RefTarget::Local(fragment_pointer(
            &JSONPointer::default(),
            fragment,
        )));
    }

    let target_uri = if uri::is_absolute(pre) {
        uri::normalize_defrag(pre)
    } else {
        // a reference at the root of a fetched document has no strict
        // ancestor; the fetch URL itself is the base then
        let base = nearest_base(ref_pointer, absolute_ids)
            .or(document_uri)
            .ok_or_else(|| SchemaError::NoBaseUri {
                reference: reference.to_string(),
            })?;
        let joined = uri::join_sibling(&uri::normalize_defrag(base), pre)?;
        uri::normalize_defrag(&joined)
    };
    let full = match fragment {
        Some(fragment) => format!("{}#{}", target_uri, fragment),
        None => target_uri.clone(),
    };

    // an id carrying the full reference, fragment included, wins
    if let Some((pointer, _)) = absolute_ids
        .iter()
        .find(|(_, id)| uri::normalize(id) == full)
    {
        return Ok(RefTarget::Local(pointer.clone()));
    }
    // then an id naming the target document
    if let Some((pointer, _)) = absolute_ids
        .iter()
        .find(|(_, id)| uri::normalize_defrag(id) == target_uri)
    {
        return Ok(RefTarget::Local(fragment_pointer(pointer, fragment)));
    }
    // then the current document itself
    let current = nearest_base(ref_pointer, absolute_ids)
        .map(uri::normalize_defrag)
        .or_else(|| document_uri.map(uri::normalize_defrag));
    if current.as_deref() == Some(target_uri.as_str()) {
        return Ok(RefTarget::Local(fragment_pointer(
            &JSONPointer::default(),
            fragment,
        )));
    }

    Ok(RefTarget::Remote {
        uri: target_uri,
        fragment: fragment.map(str::to_string),
    })
}

/// Build the containment graph between references and mark the ones whose
/// expansion cannot terminate: a reference reaching, through the targets of
/// other references, a target subtree containing itself.
fn ref_graph(
    scan: &SchemaScan,
    absolute_ids: &[(JSONPointer, String)],
    document_uri: Option<&str>,
) -> RefGraph {
    let targets: Vec<Option<JSONPointer>> = scan
        .refs
        .iter()
        .map(|(pointer, reference)| {
            match classify_ref(pointer, reference, scan, absolute_ids, document_uri) {
                Ok(RefTarget::Local(target)) => Some(target),
                // remote targets and resolution errors add no local
                // edge; errors surface on materialization
                _ => None,
            }
        })
        .collect();
    let contains: Vec<Vec<usize>> = targets
        .iter()
        .map(|target| match target {
            Some(target) => scan
                .refs
                .iter()
                .enumerate()
                .filter(|(_, (pointer, _))| pointer == target || pointer.is_child_of(target))
                .map(|(index, _)| index)
                .collect(),
            None => Vec::new(),
        })
        .collect();

    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Unvisited,
        OnStack,
        ReachesCycle,
        Safe,
    }
    fn visit(index: usize, contains: &[Vec<usize>], states: &mut [State]) -> bool {
        match states[index] {
            State::OnStack | State::ReachesCycle => return true,
            State::Safe => return false,
            State::Unvisited => {}
        }
        states[index] = State::OnStack;
        let mut cyclic = false;
        for &inner in &contains[index] {
            if visit(inner, contains, states) {
                cyclic = true;
            }
        }
        states[index] = if cyclic {
            State::ReachesCycle
        } else {
            State::Safe
        };
        cyclic
    }

    let mut states = vec![State::Unvisited; scan.refs.len()];
    let cyclic = (0..scan.refs.len())
        .map(|index| visit(index, &contains, &mut states))
        .collect();
    RefGraph { cyclic, contains }
}

/// The pointer of a target subschema with a fragment applied within it.
fn fragment_pointer(base: &JSONPointer, fragment: Option<&str>) -> JSONPointer {
    match fragment {
        Some(fragment) if !fragment.is_empty() => {
            let mut combined = base.clone();
            for token in JSONPointer::parse(fragment).tokens() {
                combined = combined.append(token);
            }
            combined
        }
        _ => base.clone(),
    }
}

/// Replace the referring object's contents with the target's keywords.
/// Sibling keywords of `$ref` are discarded.
fn substitute(
    document: &mut Value,
    pointer: &JSONPointer,
    content: Map<String, Value>,
    reference: &str,
) -> Result<(), SchemaError> {
    let place = pointer
        .follow_mut(document)
        .ok_or_else(|| SchemaError::RefNotFound {
            reference: reference.to_string(),
        })?;
    match place {
        Value::Object(object) => {
            object.clear();
            object.extend(content);
            Ok(())
        }
        _ => Err(SchemaError::RefNotASchema {
            reference: reference.to_string(),
        }),
    }
}

/// Compute absolute base URIs for every `id` that can be absolutized.
///
/// A relative id is joined against its nearest absolutizable ancestor with
/// sibling-file semantics; fragment-only ids attach to the ancestor's
/// document URI. Ids with no absolute ancestor are skipped here; the
/// `NoBaseUri` error fires once a reference actually needs one as a base.
pub(crate) fn absolute_id_map(
    scan: &SchemaScan,
    document_uri: Option<&str>,
) -> Vec<(JSONPointer, String)> {
    let mut raw: Vec<(JSONPointer, String)> = scan.ids.clone();
    if let Some(base) = document_uri {
        // the fetch URL is an implicit base even when no id is present
        if !raw.iter().any(|(pointer, _)| pointer.is_empty()) {
            raw.insert(0, (JSONPointer::default(), base.to_string()));
        }
    }
    raw.sort_by_key(|(pointer, _)| pointer.len());

    let mut absolute: Vec<(JSONPointer, String)> = Vec::with_capacity(raw.len());
    for (pointer, id) in &raw {
        // a relative id at the root of a fetched document joins against the
        // fetch URL
        let ancestor_base = nearest_base(pointer, &absolute)
            .map(str::to_string)
            .or_else(|| document_uri.map(str::to_string));
        let resolved = if uri::is_absolute(id) {
            Some(uri::normalize(id))
        } else if let Some(base) = ancestor_base {
            let base = uri::normalize_defrag(&base);
            if id.starts_with('#') {
                // location-independent identifier within the parent document
                Some(format!("{}{}", base, id))
            } else {
                uri::join_sibling(&base, &uri::normalize_defrag(id))
                    .ok()
                    .map(|joined| match uri::defrag(id).1 {
                        Some(fragment) => format!("{}#{}", uri::normalize(&joined), fragment),
                        None => uri::normalize(&joined),
                    })
            }
        } else {
            None
        };
        if let Some(resolved) = resolved {
            absolute.push((pointer.clone(), resolved));
        }
    }
    absolute
}

/// The base URI of a position: the absolute id of its nearest strict
/// ancestor.
fn nearest_base<'a>(
    pointer: &JSONPointer,
    absolute_ids: &'a [(JSONPointer, String)],
) -> Option<&'a str> {
    absolute_ids
        .iter()
        .filter(|(candidate, _)| pointer.is_child_of(candidate))
        .max_by_key(|(candidate, _)| candidate.len())
        .map(|(_, id)| id.as_str())
}
