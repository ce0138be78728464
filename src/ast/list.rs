use crate::ast::Node;

/// Generic construction and query operations over the ordered sibling
/// lists of the grammar (declarations, identifiers, statements). Element
/// order is always left-to-right source order.
pub trait AstList {
    type Elem: Node;

    /// Wrap one element as a one-item list; the list takes the element's
    /// location.
    fn singleton(elem: Self::Elem) -> Self;

    /// Return the list with `elem` linked after the current last element.
    /// The list keeps its own location, which for the zero-or-more
    /// declaration families is the location of the empty marker it was
    /// started from.
    fn append(self, elem: Self::Elem) -> Self;

    /// The last element, or `None` for an empty list.
    fn last_elem(&self) -> Option<&Self::Elem>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// One grammar production per wrapper kind, but the list plumbing is
// identical for all of them.
macro_rules! impl_ast_list {
    ($list:ident, $elem:ty, $field:ident) => {
        impl crate::ast::AstList for $list {
            type Elem = $elem;

            fn singleton(elem: $elem) -> Self {
                Self {
                    loc: crate::ast::Node::loc(&elem).clone(),
                    $field: vec![elem],
                }
            }

            fn append(mut self, elem: $elem) -> Self {
                self.$field.push(elem);
                self
            }

            fn last_elem(&self) -> Option<&$elem> {
                self.$field.last()
            }

            fn len(&self) -> usize {
                self.$field.len()
            }
        }
    };
}

pub(crate) use impl_ast_list;
