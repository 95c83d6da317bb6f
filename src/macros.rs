/// Builds a papr document root from a JSON-like literal.
///
/// Objects become keys, arrays become one group per element, `null` leaves
/// a bare key and any other expression becomes a value through `ToString`.
/// Negative numbers and other multi-token expressions need parentheses.
///
/// ```rust
/// use papr::{papr, serialize};
///
/// let root = papr!({
///     "owner": { "name": "John", "age": 42 },
///     "seasons": ["spring", "summer"],
///     "retired": null
/// });
///
/// assert_eq!(
///     serialize(&root),
///     "owner: name: John\n       age: 42\nseasons: spring\n       : summer\nretired\n"
/// );
/// ```
#[macro_export]
macro_rules! papr {
    ({}) => {
        $crate::Node::new_root()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut root = $crate::Node::new_root();
        $(
            $crate::papr!(@attach root.add_key($key), $value);
        )*
        root.simplify();
        root
    }};

    (@attach $parent:expr, null) => {{
        let _ = $parent;
    }};

    (@attach $parent:expr, {}) => {{
        let _ = $parent;
    }};

    (@attach $parent:expr, []) => {{
        let _ = $parent;
    }};

    (@attach $parent:expr, { $($key:literal : $value:tt),* $(,)? }) => {{
        let parent: &mut $crate::Node = $parent;
        $(
            $crate::papr!(@attach parent.add_key($key), $value);
        )*
    }};

    (@attach $parent:expr, [ $($elem:tt),* $(,)? ]) => {{
        let parent: &mut $crate::Node = $parent;
        $(
            $crate::papr!(@attach parent.add_group(), $elem);
        )*
    }};

    (@attach $parent:expr, $value:expr) => {{
        let parent: &mut $crate::Node = $parent;
        parent.add_value($value.to_string());
    }};
}
