//! Subset and product enumeration for group selections.
//!
//! Two small, total enumeration primitives back the group machinery:
//! size-k subset generation for a group's "pick N" policy, and a
//! Cartesian product composing the per-group choices into complete
//! selections.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.3

/// Enumerates every subset of exactly `pick` items, preserving the
/// relative input order within each subset.
///
/// Uses an explicit stack over the binary include/exclude choice per
/// item instead of recursion, so call-stack depth stays constant on
/// large inputs. Subsets come out in lexicographic index order.
///
/// Degenerate input: fewer items than `pick` yields a single combination
/// holding all items — the permissive "select all members" behavior
/// callers rely on (see DESIGN.md).
pub fn combinations_of_size<T: Clone>(items: &[T], pick: usize) -> Vec<Vec<T>> {
    if items.len() < pick {
        return vec![items.to_vec()];
    }

    let mut combinations = Vec::new();
    // Frames: (next index to decide, indices included so far).
    let mut stack: Vec<(usize, Vec<usize>)> = vec![(0, Vec::new())];

    while let Some((index, chosen)) = stack.pop() {
        if chosen.len() == pick {
            combinations.push(chosen.iter().map(|&i| items[i].clone()).collect());
            continue;
        }
        // Not enough items left to reach `pick`
        if chosen.len() + (items.len() - index) < pick {
            continue;
        }
        // Exclude branch first so the include branch pops first (LIFO)
        stack.push((index + 1, chosen.clone()));
        let mut included = chosen;
        included.push(index);
        stack.push((index + 1, included));
    }

    combinations
}

/// Cartesian product over an arbitrary number of dimensions.
///
/// Fold-based: starts from one empty tuple and extends every accumulated
/// tuple with every element of the next dimension. An empty dimension
/// empties the whole product; zero dimensions yield one empty tuple.
pub fn cartesian_product<T: Clone>(dimensions: &[Vec<T>]) -> Vec<Vec<T>> {
    dimensions.iter().fold(vec![Vec::new()], |acc, dimension| {
        let mut next = Vec::with_capacity(acc.len() * dimension.len());
        for prefix in &acc {
            for item in dimension {
                let mut tuple = prefix.clone();
                tuple.push(item.clone());
                next.push(tuple);
            }
        }
        next
    })
}
