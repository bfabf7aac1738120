use super::captures::CaptureBuf;
use super::path::{parse_template, Part, ROOT};
use crate::middleware::{BoxMiddleware, Chain};
use crate::strmap::StrMap;

use std::borrow::Cow;
use std::sync::Arc;

/// Prefix tree over path segments.
///
/// Nodes live in an arena and refer to each other by index. The tree is only
/// mutated by [`RouteTree::insert`]; lookups never write.
#[derive(Debug)]
pub(crate) struct RouteTree<C> {
    nodes: Vec<Node<C>>,
}

#[derive(Debug)]
struct Node<C> {
    literals: StrMap<usize>,
    param: Option<ParamEdge>,
    terminal: Option<Terminal<C>>,
}

#[derive(Debug)]
struct ParamEdge {
    name: Arc<str>,
    child: usize,
}

#[derive(Debug)]
struct Terminal<C> {
    pattern: Arc<str>,
    chain: Chain<C>,
}

pub(crate) struct Lookup<'t, 'p, C> {
    pub(crate) pattern: &'t Arc<str>,
    pub(crate) chain: &'t Chain<C>,
    pub(crate) captures: CaptureBuf<'t, 'p>,
}

const ROOT_NODE: usize = 0;

impl<C> Node<C> {
    fn new() -> Self {
        Self {
            literals: StrMap::new(),
            param: None,
            terminal: None,
        }
    }
}

impl<C> RouteTree<C> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
        }
    }

    pub(crate) fn route_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.terminal.is_some()).count()
    }

    /// Inserts `pattern`, appending `handlers` to the chain already stored at
    /// its terminal node. `prefix` seeds the chain when the node had none.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        prefix: &[BoxMiddleware<C>],
        handlers: impl IntoIterator<Item = BoxMiddleware<C>>,
    ) {
        let mut cur = ROOT_NODE;
        for part in parse_template(pattern) {
            cur = match part {
                Part::Literal(seg) => self.literal_child(cur, seg),
                Part::Param(name) => self.param_child(cur, name, pattern),
            };
        }

        let terminal = self.nodes[cur].terminal.get_or_insert_with(|| Terminal {
            pattern: pattern.into(),
            chain: prefix.iter().cloned().collect(),
        });
        terminal.pattern = pattern.into();
        terminal.chain.extend(handlers);
    }

    fn literal_child(&mut self, cur: usize, seg: &str) -> usize {
        if let Some(&child) = self.nodes[cur].literals.find(seg) {
            return child;
        }
        let child = self.push_node();
        *self.nodes[cur].literals.find_mut_with(seg, || child) = child;
        child
    }

    fn param_child(&mut self, cur: usize, name: &str, pattern: &str) -> usize {
        if let Some(edge) = self.nodes[cur].param.as_mut() {
            if &*edge.name != name {
                tracing::warn!(
                    pattern,
                    previous = &*edge.name,
                    current = name,
                    "parameter renamed at shared tree depth; the later name wins"
                );
                edge.name = name.into();
            }
            return edge.child;
        }
        let child = self.push_node();
        self.nodes[cur].param = Some(ParamEdge {
            name: name.into(),
            child,
        });
        child
    }

    fn push_node(&mut self) -> usize {
        self.nodes.push(Node::new());
        self.nodes.len() - 1
    }

    /// Walks `segments` down the tree.
    ///
    /// A literal child always wins over the parameter edge at the same depth
    /// and the walk never backtracks, so a literal branch that dead-ends makes
    /// the whole lookup fail even if the parameter branch would have matched.
    pub(crate) fn lookup<'t, 'p>(
        &'t self,
        segments: &'p [Cow<'p, str>],
    ) -> Option<Lookup<'t, 'p, C>> {
        let mut captures = CaptureBuf::new();
        let mut cur = ROOT_NODE;
        let last = segments.len().checked_sub(1)?;

        for (i, seg) in segments.iter().enumerate() {
            let node = &self.nodes[cur];
            let is_last = i == last;

            if let Some(&child) = node.literals.find(seg) {
                if is_last && self.nodes[child].terminal.is_none() {
                    return None;
                }
                cur = child;
                continue;
            }

            // The root segment only ever matches the root literal.
            if seg == ROOT {
                return None;
            }
            let edge = node.param.as_ref()?;
            if is_last && self.nodes[edge.child].terminal.is_none() {
                return None;
            }
            captures.push((&edge.name, &**seg));
            cur = edge.child;
        }

        let terminal = self.nodes[cur].terminal.as_ref()?;
        Some(Lookup {
            pattern: &terminal.pattern,
            chain: &terminal.chain,
            captures,
        })
    }
}
