//! Structural merge of strategy options
//!
//! User options extend the defaults rather than replacing them: scalars set
//! by the user win, lists are concatenated, maps are merged key by key.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use dash_core::UNDISCLOSED;

use crate::defaults::{undisclosed_area, undisclosed_floor};
use crate::options::{
    AreaOptions, CardOptions, ChipOptions, DomainOptions, FloorOptions, HomeViewOptions,
    StrategyOptions, ViewOptions,
};

/// Merge `other` into `self`, `other` taking precedence
pub trait Merge {
    fn merge(&mut self, other: Self);
}

impl<T> Merge for Option<T> {
    fn merge(&mut self, other: Self) {
        if other.is_some() {
            *self = other;
        }
    }
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, other: Self) {
        self.extend(other);
    }
}

impl<V: Merge> Merge for IndexMap<String, V> {
    fn merge(&mut self, other: Self) {
        for (key, value) in other {
            match self.get_mut(&key) {
                Some(existing) => existing.merge(value),
                None => {
                    self.insert(key, value);
                }
            }
        }
    }
}

macro_rules! impl_merge {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl Merge for $ty {
            fn merge(&mut self, other: Self) {
                $( self.$field.merge(other.$field); )*
            }
        }
    };
}

impl_merge!(AreaOptions { area_id, name, icon, floor_id, order, hidden, extra_cards });
impl_merge!(FloorOptions { floor_id, name, icon, level, hidden });
impl_merge!(DomainOptions {
    title,
    icon,
    order,
    hidden,
    show_controls,
    hide_config_entities,
    services,
    extra_cards,
});
impl_merge!(ViewOptions { title, icon, order, hidden });
impl_merge!(CardOptions { hidden });
impl_merge!(HomeViewOptions { hidden });
impl_merge!(ChipOptions { hidden, extra_chips });
impl_merge!(StrategyOptions {
    areas,
    floors,
    domains,
    views,
    card_options,
    home_view,
    chips,
    extra_cards,
    extra_views,
});

/// Compare optional sort keys, entries without a key sorting last
pub fn cmp_order<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_order_then_title(
    a: (Option<i64>, Option<&str>),
    b: (Option<i64>, Option<&str>),
) -> Ordering {
    cmp_order(a.0, b.0).then_with(|| a.1.unwrap_or("").cmp(b.1.unwrap_or("")))
}

/// Merge user options over the defaults
///
/// The defaults are cloned, never mutated. After the merge the undisclosed
/// area and floor blocks are synthesized unless the user hid the undisclosed
/// area, in which case the undisclosed floor is dropped. Views and domains
/// are re-sorted by `(order, title)`.
pub fn merge_options(defaults: &StrategyOptions, user: StrategyOptions) -> StrategyOptions {
    let mut merged = defaults.clone();
    merged.merge(user);

    if merged.is_undisclosed_hidden() {
        debug!("Undisclosed area hidden by configuration");
        merged.floors.shift_remove(UNDISCLOSED);
    } else {
        inject(&mut merged.areas, undisclosed_area());
        inject(&mut merged.floors, undisclosed_floor());
    }

    sort_sections(&mut merged);
    merged
}

/// Sort views and domains by `(order, title)`, unordered entries last
pub(crate) fn sort_sections(options: &mut StrategyOptions) {
    options.views.sort_by(|_, a, _, b| {
        cmp_order_then_title((a.order, a.title.as_deref()), (b.order, b.title.as_deref()))
    });
    options.domains.sort_by(|_, a, _, b| {
        cmp_order_then_title((a.order, a.title.as_deref()), (b.order, b.title.as_deref()))
    });
}

/// Insert the undisclosed default block, keeping user overrides on top
///
/// An entry already carrying the block is left as it is.
fn inject<V: Merge + Default>(map: &mut IndexMap<String, V>, mut block: V) {
    match map.get_mut(UNDISCLOSED) {
        Some(existing) => {
            block.merge(std::mem::take(existing));
            *existing = block;
        }
        None => {
            map.insert(UNDISCLOSED.to_string(), block);
        }
    }
}
