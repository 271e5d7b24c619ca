/// Defines a carrier struct and the field metadata [`to_map`](crate::to_map)
/// walks.
///
/// The struct is emitted as written, attributes included, so serde derives
/// and field attributes work as usual. A field may be followed by
/// `=> "annotation"` to give it an external name for extraction; see
/// [`tag`](crate::tag) for the grammar. `MutationCell` fields are detected
/// from their type, every other field is carried but never extracted.
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tracked_extract::{MutationCell, carrier, to_map};
///
/// carrier! {
///     #[derive(Debug, Default, Serialize, Deserialize)]
///     #[serde(default)]
///     pub struct UserPatch {
///         pub name: MutationCell<String> => "name",
///         pub age: MutationCell<u32> => "age,omitempty",
///         pub email: MutationCell<String> => "-",
///         pub admin: MutationCell<bool>,
///         pub revision: u64,
///     }
/// }
///
/// let mut patch = UserPatch::default();
/// patch.name.set("Ada".to_string());
/// patch.admin.set(false);
///
/// let map = to_map(&patch);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["name"], "Ada");
/// assert_eq!(map["admin"], false);
/// ```
///
/// Generic and tuple structs are not supported.
#[macro_export]
macro_rules! carrier {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Extract for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Struct(self)
            }
        }

        impl $crate::Fields for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::FieldEntry<'_>> {
                #[allow(unused_imports)]
                use $crate::__private::{CellProbe as _, PlainProbe as _};

                ::std::vec![
                    $(
                        $crate::FieldEntry::new(
                            ::core::stringify!($field),
                            $crate::__private::tag(&[$($tag)?]),
                            (&$crate::__private::Probe(&self.$field)).probe(),
                        ),
                    )*
                ]
            }
        }
    };
}
