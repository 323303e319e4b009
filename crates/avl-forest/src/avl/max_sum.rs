use std::any::{type_name, Any};
use std::fmt;

use crate::error::AvlError;

use super::AvlTree;

/// Best root-to-leaf path found by [`AvlTree::max_sum_path`].
///
/// `path` holds one letter per step below the root: `E` for a left step and
/// `D` for a right step. The root itself contributes no letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaxSumPath {
    pub path: String,
    pub sum: i64,
}

impl fmt::Display for MaxSumPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path={} sum={}", self.path, self.sum)
    }
}

/// Widens a primitive integer item to `i64`; `None` for any other type.
fn as_integer(item: &dyn Any) -> Option<i64> {
    macro_rules! widen {
        ($($t:ty),*) => {
            $(
                if let Some(v) = item.downcast_ref::<$t>() {
                    return Some(i64::from(*v));
                }
            )*
        };
    }
    widen!(i8, i16, i32, i64, u8, u16, u32);
    item.downcast_ref::<isize>().map(|v| *v as i64)
}

impl<T, K, F, C> AvlTree<T, K, F, C>
where
    T: Any,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    /// Root-to-leaf path with the greatest item sum.
    ///
    /// At every node the heavier side is followed, the left side winning
    /// ties; a missing child counts as sum `0`. An empty tree yields an empty
    /// path with sum `0`.
    ///
    /// Only trees of primitive integers are supported; any other item type
    /// fails with [`AvlError::UnsupportedItemType`].
    pub fn max_sum_path(&self) -> Result<MaxSumPath, AvlError> {
        match self.root {
            None => Ok(MaxSumPath::default()),
            Some(root) => self.max_sum_at(root),
        }
    }

    fn max_sum_at(&self, i: u32) -> Result<MaxSumPath, AvlError> {
        let node = self.node(i);
        let value = as_integer(&node.item).ok_or(AvlError::UnsupportedItemType {
            type_name: type_name::<T>(),
        })?;

        if node.l.is_none() && node.r.is_none() {
            return Ok(MaxSumPath {
                path: String::new(),
                sum: value,
            });
        }

        let left = match node.l {
            Some(l) => self.max_sum_at(l)?,
            None => MaxSumPath::default(),
        };
        let right = match node.r {
            Some(r) => self.max_sum_at(r)?,
            None => MaxSumPath::default(),
        };

        let (step, best) = if left.sum >= right.sum {
            ('E', left)
        } else {
            ('D', right)
        };
        Ok(MaxSumPath {
            path: format!("{step}{}", best.path),
            sum: value.checked_add(best.sum).ok_or(AvlError::SumOverflow)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widens_supported_integers() {
        assert_eq!(as_integer(&7i8), Some(7));
        assert_eq!(as_integer(&-7i64), Some(-7));
        assert_eq!(as_integer(&7u32), Some(7));
        assert_eq!(as_integer(&7isize), Some(7));
    }

    #[test]
    fn rejects_other_types() {
        assert_eq!(as_integer(&7.0f64), None);
        assert_eq!(as_integer(&"7"), None);
        assert_eq!(as_integer(&7u64), None);
    }

    #[test]
    fn display_format() {
        let best = MaxSumPath {
            path: "ED".to_string(),
            sum: 12,
        };
        assert_eq!(best.to_string(), "path=ED sum=12");
    }
}
