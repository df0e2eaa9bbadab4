use crate::record::Contact;
use std::fmt;

/// Case-folds a contact name one character at a time.
///
/// Folding per character keeps insert, lookup and delete on the exact same path even for
/// characters whose lowercase form expands to several code points.
fn fold(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// One trie level. Children are kept sorted by `char` and searched with a binary search,
/// which keeps a single-child node down to one small allocation. Every walk over the trie
/// is a loop, never a recursion, since a name may be millions of characters deep.
#[derive(Default)]
struct TrieNode {
    children: Vec<(char, TrieNode)>,
    contact: Option<Box<Contact>>,
}

impl TrieNode {
    fn slot(&self, ch: char) -> Result<usize, usize> {
        self.children.binary_search_by_key(&ch, |(c, _)| *c)
    }

    fn child(&self, ch: char) -> Option<&TrieNode> {
        self.slot(ch).ok().map(|i| &self.children[i].1)
    }

    fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        match self.slot(ch) {
            Ok(i) => Some(&mut self.children[i].1),
            Err(_) => None,
        }
    }

    fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        let i = match self.slot(ch) {
            Ok(i) => i,
            Err(i) => {
                self.children.insert(i, (ch, TrieNode::default()));
                i
            }
        };
        &mut self.children[i].1
    }

    fn remove_child(&mut self, ch: char) -> Option<TrieNode> {
        self.slot(ch).ok().map(|i| self.children.remove(i).1)
    }

    /// Depth-first, payload before children, children in ascending `char` order.
    fn collect_into(&self, out: &mut Vec<Contact>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(contact) = &node.contact {
                out.push(Contact::clone(contact));
            }
            // Reversed so the smallest child is popped first.
            stack.extend(node.children.iter().rev().map(|(_, child)| child));
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children)
            .into_iter()
            .map(|(_, child)| child)
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(
                std::mem::take(&mut node.children)
                    .into_iter()
                    .map(|(_, child)| child),
            );
        }
    }
}

/// How a delete leaves the trie once the payload is gone.
enum Removal {
    /// The target node still has children; only its payload goes.
    ClearPayload,
    /// Detach the path child of the node at this depth. Everything below it on the path
    /// would be left without payload or children.
    Detach(usize),
}

/// Contact store keyed by case-folded name, backed by a character trie.
///
/// Enumeration is always sorted by folded name, so listing and prefix search never need a
/// separate sort step.
#[derive(Default)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the contact stored under the folded `name`.
    ///
    /// The empty name is legal and lives on the root node.
    pub fn insert(&mut self, name: &str, phone: &str, email: &str) {
        let node = fold(name).fold(&mut self.root, TrieNode::child_or_insert);
        if node.contact.is_none() {
            self.len += 1;
        }
        node.contact = Some(Box::new(Contact::new(name, phone, email)));
    }

    pub fn lookup_exact(&self, name: &str) -> Option<Contact> {
        self.descend(name)
            .and_then(|node| node.contact.as_deref().cloned())
    }

    /// Every contact whose folded name starts with the folded `prefix`, ascending.
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<Contact> {
        let mut out = Vec::new();
        if let Some(node) = self.descend(prefix) {
            node.collect_into(&mut out);
        }
        out
    }

    /// Removes the contact under the folded `name`, pruning the branch that held nothing
    /// else. Returns whether one was present.
    pub fn delete(&mut self, name: &str) -> bool {
        let path: Vec<char> = fold(name).collect();
        let Some(removal) = self.plan_removal(&path) else {
            return false;
        };
        match removal {
            Removal::ClearPayload => {
                if let Some(node) = self.descend_mut(&path) {
                    node.contact = None;
                }
            }
            Removal::Detach(depth) => {
                if let Some(node) = self.descend_mut(&path[..depth]) {
                    node.remove_child(path[depth]);
                }
            }
        }
        self.len -= 1;
        true
    }

    pub fn list_all(&self) -> Vec<Contact> {
        self.lookup_prefix("")
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn descend(&self, key: &str) -> Option<&TrieNode> {
        fold(key).try_fold(&self.root, |node, ch| node.child(ch))
    }

    fn descend_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        path.iter()
            .try_fold(&mut self.root, |node, &ch| node.child_mut(ch))
    }

    /// `None` when nothing is stored at `path`.
    fn plan_removal(&self, path: &[char]) -> Option<Removal> {
        let mut node = &self.root;
        // Deepest node on the path that survives the delete; the root always does.
        let mut keep = 0;
        for (depth, &ch) in path.iter().enumerate() {
            if node.contact.is_some() || node.children.len() > 1 {
                keep = depth;
            }
            node = node.child(ch)?;
        }
        if node.contact.is_none() {
            return None;
        }

        if path.is_empty() || !node.children.is_empty() {
            Some(Removal::ClearPayload)
        } else {
            Some(Removal::Detach(keep))
        }
    }
}
