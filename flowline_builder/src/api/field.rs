use crate::api::{coerce, Parameter};
use crate::model::{Shape, Value};
use crate::prelude::Coercible;

// We need a (dyn .. [ignoring V] ..) here in order to put all the fields of varying types V under one collection.
type Assign<T> = Box<dyn Fn(&mut T, Value) -> bool>;

/// A named, typed accessor to one field of `T`.
pub struct Field<T> {
    name: String,
    shape: Shape,
    assign: Assign<T>,
}

impl<T: 'static> Field<T> {
    /// Create a field from its name and accessor.
    /// The field's [`Shape`] is fixed by the accessor's target type.
    pub fn new<V, F>(name: impl Into<String>, accessor: F) -> Self
    where
        V: Coercible + 'static,
        F: Fn(&mut T) -> &mut V + 'static,
    {
        Self {
            name: name.into(),
            shape: V::SHAPE,
            assign: Box::new(move |target: &mut T, value: Value| match V::from_value(value) {
                Some(inner) => {
                    *accessor(target) = inner;
                    true
                }
                None => false,
            }),
        }
    }
}

impl<T> Field<T> {
    /// The name of this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape this field accepts.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Coerce the raw value and, when it applies, write it into the target.
    /// Returns whether the target was modified.
    pub(crate) fn assign(&self, target: &mut T, raw: &str) -> bool {
        match coerce(self.shape, raw) {
            Some(value) => (self.assign)(target, value),
            None => false,
        }
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish()
    }
}

/// The accessor table for a [`Bindable`](crate::prelude::Bindable) type.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::{Fields, Shape};
///
/// #[derive(Default)]
/// struct Limits {
///     count: i32,
///     names: Vec<String>,
/// }
///
/// let fields = Fields::new()
///     .field("count", |l: &mut Limits| &mut l.count)
///     .field("names", |l: &mut Limits| &mut l.names);
///
/// assert_eq!(fields.names(), vec!["count", "names"]);
/// assert_eq!(fields.get("COUNT").unwrap().shape(), Shape::Integer);
/// ```
pub struct Fields<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Self {
            fields: Vec::default(),
        }
    }
}

impl<T: 'static> Fields<T> {
    /// Create an empty accessor table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the accessor table.
    /// If repeated (the same name, ignoring case), only the final accessor applies.
    pub fn field<V, F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        V: Coercible + 'static,
        F: Fn(&mut T) -> &mut V + 'static,
    {
        let field = Field::new(name, accessor);

        match self
            .fields
            .iter()
            .position(|f| f.name.to_lowercase() == field.name.to_lowercase())
        {
            Some(index) => self.fields[index] = field,
            None => self.fields.push(field),
        }

        self
    }
}

impl<T> Fields<T> {
    /// The names of every field, in the order they were added.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    /// Find a field by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Field<T>> {
        let name = name.to_lowercase();
        self.fields.iter().find(|f| f.name.to_lowercase() == name)
    }

    /// Find the field a parameter binds onto.
    ///
    /// Only the highest priority identifier is considered: the field name, else the full name, else the short name.
    pub(crate) fn resolve(&self, parameter: &Parameter) -> Option<&Field<T>> {
        parameter
            .identifiers()
            .first()
            .and_then(|identifier| self.get(identifier))
    }
}
