//! Record introspection: the method descriptors a record type exposes.
//!
//! Rust has no runtime reflection, so a record type describes itself by
//! implementing [`Bean`]: an ordered list of named, typed methods plus an
//! optional zero-argument constructor. The converters only ever see a record
//! through these descriptors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{AttrType, Attribute, InvocationError, Value};

/// Invoker for a method that only reads its receiver.
pub type ReadFn<T> = dyn Fn(&T, Vec<Value>) -> Result<Value, InvocationError> + Send + Sync;

/// Invoker for a method that mutates its receiver.
pub type WriteFn<T> = dyn Fn(&mut T, Vec<Value>) -> Result<Value, InvocationError> + Send + Sync;

/// How a method borrows its receiver.
pub enum Receiver<T> {
    Shared(Arc<ReadFn<T>>),
    Exclusive(Arc<WriteFn<T>>),
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        match self {
            Receiver::Shared(f) => Receiver::Shared(Arc::clone(f)),
            Receiver::Exclusive(f) => Receiver::Exclusive(Arc::clone(f)),
        }
    }
}

/// A single method of a record type.
pub struct Method<T> {
    name: Cow<'static, str>,
    params: Vec<AttrType>,
    returns: Option<AttrType>,
    receiver: Receiver<T>,
}

impl<T: 'static> Method<T> {
    /// Describe a method by hand.
    ///
    /// The typed constructors below cover the usual shapes; use this one
    /// for anything else.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        params: Vec<AttrType>,
        returns: Option<AttrType>,
        receiver: Receiver<T>,
    ) -> Self {
        Method {
            name: name.into(),
            params,
            returns,
            receiver,
        }
    }

    /// A zero-argument reader such as `getId`.
    pub fn reader<R, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        R: Attribute,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        Self::try_reader::<R, _>(name, move |target: &T| Ok(f(target)))
    }

    /// A zero-argument reader whose body may fail.
    pub fn try_reader<R, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        R: Attribute,
        F: Fn(&T) -> Result<R, InvocationError> + Send + Sync + 'static,
    {
        Self::new(
            name,
            Vec::new(),
            Some(R::TYPE),
            Receiver::Shared(Arc::new(move |target: &T, _args: Vec<Value>| {
                f(target).map(Attribute::into_value)
            })),
        )
    }

    /// A reader taking one argument, such as an overload `getName(int)`.
    pub fn reader_with<A, R, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        A: Attribute,
        R: Attribute,
        F: Fn(&T, A) -> R + Send + Sync + 'static,
    {
        Self::new(
            name,
            vec![A::TYPE],
            Some(R::TYPE),
            Receiver::Shared(Arc::new(
                move |target: &T, args: Vec<Value>| -> Result<Value, InvocationError> {
                    let arg = single_argument::<A>(args)?;
                    Ok(f(target, arg).into_value())
                },
            )),
        )
    }

    /// A single-argument writer such as `setId`.
    pub fn writer<A, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        A: Attribute,
        F: Fn(&mut T, A) + Send + Sync + 'static,
    {
        Self::try_writer::<A, _>(name, move |target: &mut T, arg: A| {
            f(target, arg);
            Ok(())
        })
    }

    /// A single-argument writer whose body may fail.
    pub fn try_writer<A, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        A: Attribute,
        F: Fn(&mut T, A) -> Result<(), InvocationError> + Send + Sync + 'static,
    {
        Self::new(
            name,
            vec![A::TYPE],
            None,
            Receiver::Exclusive(Arc::new(
                move |target: &mut T, args: Vec<Value>| -> Result<Value, InvocationError> {
                    let arg = single_argument::<A>(args)?;
                    f(target, arg).map(|()| Value::Null)
                },
            )),
        )
    }
}

impl<T> Method<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[AttrType] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The declared result type, `None` for methods returning nothing.
    pub fn returns(&self) -> Option<AttrType> {
        self.returns
    }

    pub fn receiver(&self) -> &Receiver<T> {
        &self.receiver
    }

    /// Invoke through a shared reference.
    ///
    /// Fails with `RequiresExclusive` for methods that mutate the receiver.
    pub fn invoke(&self, target: &T, args: Vec<Value>) -> Result<Value, InvocationError> {
        self.check_arity(&args)?;
        match &self.receiver {
            Receiver::Shared(f) => f(target, args),
            Receiver::Exclusive(_) => Err(InvocationError::RequiresExclusive),
        }
    }

    /// Invoke through an exclusive reference. Accepts any receiver.
    pub fn invoke_mut(&self, target: &mut T, args: Vec<Value>) -> Result<Value, InvocationError> {
        self.check_arity(&args)?;
        match &self.receiver {
            Receiver::Shared(f) => f(target, args),
            Receiver::Exclusive(f) => f(target, args),
        }
    }

    fn check_arity(&self, args: &[Value]) -> Result<(), InvocationError> {
        if args.len() != self.params.len() {
            return Err(InvocationError::Arity {
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        Ok(())
    }
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        Method {
            name: self.name.clone(),
            params: self.params.clone(),
            returns: self.returns,
            receiver: self.receiver.clone(),
        }
    }
}

impl<T> fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field(
                "receiver",
                &match self.receiver {
                    Receiver::Shared(_) => "shared",
                    Receiver::Exclusive(_) => "exclusive",
                },
            )
            .finish()
    }
}

fn single_argument<A: Attribute>(args: Vec<Value>) -> Result<A, InvocationError> {
    let actual = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(arg), None) => A::from_value(arg),
        _ => Err(InvocationError::Arity {
            expected: 1,
            actual,
        }),
    }
}

/// A zero-argument constructor.
pub struct Constructor<T>(Arc<dyn Fn() -> Result<T, InvocationError> + Send + Sync>);

impl<T> Constructor<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, InvocationError> + Send + Sync + 'static,
    {
        Constructor(Arc::new(f))
    }

    pub fn construct(&self) -> Result<T, InvocationError> {
        (self.0)()
    }
}

impl<T: Default + 'static> Constructor<T> {
    /// Construct through `Default`.
    pub fn default_ctor() -> Self {
        Constructor::new(|| Ok(T::default()))
    }
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        Constructor(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Constructor")
    }
}

/// A record type that can describe its own methods.
///
/// # Method order
///
/// `methods()` returns methods in declaration order. That order is the
/// enumeration order the converters use: when two readers derive the same
/// attribute name the later one wins, and among overloaded writers the
/// earlier one is tried first.
pub trait Bean: Sized + 'static {
    /// The unqualified type name used in diagnostics.
    fn type_name() -> &'static str {
        simple_type_name::<Self>()
    }

    /// All methods of the type, in declaration order.
    fn methods() -> Vec<Method<Self>>;

    /// The zero-argument constructor, if the type has one.
    fn constructor() -> Option<Constructor<Self>> {
        None
    }
}

/// The last path segment of a type's name, without generic arguments.
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
