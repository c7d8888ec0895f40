//! In-memory stand-in for the engine.
//!
//! Vertices hold their values directly and arithmetic is evaluated eagerly.
//! Samplers return every vertex's current value as each sample, which is
//! enough to check the plumbing without any real inference.

#![allow(dead_code)]

use keanu_bridge::{classes, Gateway, RemoteError, RemoteHandle, RemoteObject, RemoteValue};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

type EngineResult<T> = Result<T, RemoteError>;
type Method = Box<dyn Fn(&[RemoteValue]) -> EngineResult<RemoteValue>>;
type Ids = Rc<Cell<i64>>;

pub const GAUSSIAN_VERTEX: &str = "io.improbable.keanu.vertices.dbl.probabilistic.GaussianVertex";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn engine() -> Rc<FakeEngine> {
    init_logging();
    Rc::new(FakeEngine::default())
}

fn engine_error(exception: &str, message: impl Into<String>) -> RemoteError {
    RemoteError::new(exception, message)
}

pub struct FakeObject {
    class: String,
    methods: HashMap<String, Method>,
}

impl fmt::Debug for FakeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fake({})", self.class)
    }
}

impl FakeObject {
    fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            methods: HashMap::new(),
        }
    }

    fn method(
        mut self,
        name: &str,
        body: impl Fn(&[RemoteValue]) -> EngineResult<RemoteValue> + 'static,
    ) -> Self {
        self.methods.insert(name.to_string(), Box::new(body));
        self
    }

    fn handle(self) -> RemoteHandle {
        RemoteHandle::new(self)
    }
}

impl RemoteObject for FakeObject {
    fn class_name(&self) -> EngineResult<String> {
        Ok(self.class.clone())
    }

    fn invoke(&self, method: &str, args: &[RemoteValue]) -> EngineResult<RemoteValue> {
        match self.methods.get(method) {
            Some(body) => body(args),
            None => Err(engine_error(
                "java.lang.NoSuchMethodException",
                format!("{}.{}", self.class, method),
            )),
        }
    }
}

fn arg(args: &[RemoteValue], i: usize) -> EngineResult<&RemoteValue> {
    args.get(i).ok_or_else(|| {
        engine_error("java.lang.IllegalArgumentException", format!("missing argument {}", i))
    })
}

fn object(value: &RemoteValue) -> EngineResult<RemoteHandle> {
    value
        .as_handle()
        .cloned()
        .ok_or_else(|| engine_error("java.lang.ClassCastException", value.type_name()))
}

fn call(handle: &RemoteHandle, method: &str) -> EngineResult<RemoteValue> {
    handle.object().invoke(method, &[])
}

fn items(value: RemoteValue) -> EngineResult<Vec<RemoteValue>> {
    match value {
        RemoteValue::List(items) => Ok(items),
        other => Err(engine_error("java.lang.ClassCastException", other.type_name())),
    }
}

/// Flat data plus shape
#[derive(Debug, Clone, PartialEq)]
pub struct Values {
    data: Vec<f64>,
    shape: Vec<i64>,
}

impl Values {
    fn scalar(x: f64) -> Self {
        Self {
            data: vec![x],
            shape: Vec::new(),
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
        }
    }
}

fn combine(a: &Values, b: &Values, f: fn(f64, f64) -> f64) -> EngineResult<Values> {
    if b.data.len() == 1 {
        Ok(a.map(|x| f(x, b.data[0])))
    } else if a.data.len() == 1 {
        Ok(b.map(|y| f(a.data[0], y)))
    } else if a.shape == b.shape {
        Ok(Values {
            data: a.data.iter().zip(&b.data).map(|(&x, &y)| f(x, y)).collect(),
            shape: a.shape.clone(),
        })
    } else {
        Err(engine_error(
            "java.lang.IllegalArgumentException",
            format!("Cannot broadcast {:?} to {:?}", b.shape, a.shape),
        ))
    }
}

fn tensor(values: &Values) -> RemoteHandle {
    let data = values.data.clone();
    let shape = values.shape.clone();
    FakeObject::new("DoubleTensor")
        .method("asFlatArray", move |_| Ok(data.clone().into()))
        .method("getShape", move |_| Ok(shape.clone().into()))
        .handle()
}

fn read_tensor(tensor: &RemoteHandle) -> EngineResult<Values> {
    let cast = |v: &RemoteValue| engine_error("java.lang.ClassCastException", v.type_name());
    let data = items(call(tensor, "asFlatArray")?)?
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| cast(v)))
        .collect::<EngineResult<Vec<f64>>>()?;
    let shape = items(call(tensor, "getShape")?)?
        .iter()
        .map(|v| v.as_i64().ok_or_else(|| cast(v)))
        .collect::<EngineResult<Vec<i64>>>()?;
    Ok(Values { data, shape })
}

/// Value of a vertex operand or a plain number
fn value_of(value: &RemoteValue) -> EngineResult<Values> {
    match value {
        RemoteValue::Object(vertex) => read_tensor(&object(&call(vertex, "getValue")?)?),
        other => other
            .as_f64()
            .map(Values::scalar)
            .ok_or_else(|| engine_error("java.lang.ClassCastException", other.type_name())),
    }
}

fn list(class: &str, elements: Vec<RemoteValue>) -> RemoteHandle {
    let elements = Rc::new(elements);
    let (size, by_index, all, lookup) = (
        elements.len(),
        elements.clone(),
        elements.clone(),
        elements.clone(),
    );
    FakeObject::new(class)
        .method("size", move |_| Ok(RemoteValue::Int(size as i64)))
        .method("get", move |args| {
            let i = arg(args, 0)?.as_i64().unwrap_or(-1);
            usize::try_from(i)
                .ok()
                .and_then(|i| by_index.get(i).cloned())
                .ok_or_else(|| engine_error("java.lang.IndexOutOfBoundsException", i.to_string()))
        })
        .method("toArray", move |_| Ok(RemoteValue::List(all.to_vec())))
        .method("contains", move |args| {
            let needle = arg(args, 0)?;
            Ok(RemoteValue::Bool(lookup.contains(needle)))
        })
        .handle()
}

fn vertex(ids: &Ids, class: &str, initial: Values) -> RemoteHandle {
    let id = ids.get();
    ids.set(id + 1);

    let value = Rc::new(RefCell::new(initial));
    let label: Rc<RefCell<Option<RemoteHandle>>> = Rc::default();
    let observed = Rc::new(Cell::new(false));

    let mut fake = FakeObject::new(class)
        .method("getId", move |_| Ok(RemoteValue::Int(id)))
        .method("hasValue", |_| Ok(RemoteValue::Bool(true)))
        .method("getParents", |_| Ok(list("ArrayList", Vec::new()).into()))
        .method("getValue", {
            let value = value.clone();
            move |_| Ok(tensor(&value.borrow()).into())
        })
        .method("setLabel", {
            let label = label.clone();
            move |args| {
                *label.borrow_mut() = Some(object(arg(args, 0)?)?);
                Ok(RemoteValue::Null)
            }
        })
        .method("getLabel", {
            let label = label.clone();
            move |_| Ok(label.borrow().clone().map_or(RemoteValue::Null, RemoteValue::Object))
        })
        .method("observe", {
            let (value, observed) = (value.clone(), observed.clone());
            move |args| {
                let observation = value_of(arg(args, 0)?)?;
                *value.borrow_mut() = observation;
                observed.set(true);
                Ok(RemoteValue::Null)
            }
        })
        .method("isObserved", {
            let observed = observed.clone();
            move |_| Ok(RemoteValue::Bool(observed.get()))
        });

    let binary: [(&str, &str, fn(f64, f64) -> f64); 11] = [
        ("plus", "AdditionVertex", |a, b| a + b),
        ("minus", "DifferenceVertex", |a, b| a - b),
        ("times", "MultiplicationVertex", |a, b| a * b),
        ("div", "DivisionVertex", |a, b| a / b),
        ("pow", "PowerVertex", f64::powf),
        ("greaterThan", "GreaterThanVertex", |a, b| if a > b { 1.0 } else { 0.0 }),
        ("greaterThanOrEqual", "GreaterThanOrEqualVertex", |a, b| if a >= b { 1.0 } else { 0.0 }),
        ("lessThan", "LessThanVertex", |a, b| if a < b { 1.0 } else { 0.0 }),
        ("lessThanOrEqual", "LessThanOrEqualVertex", |a, b| if a <= b { 1.0 } else { 0.0 }),
        ("equalTo", "EqualsVertex", |a, b| if a == b { 1.0 } else { 0.0 }),
        ("notEqualTo", "NotEqualsVertex", |a, b| if a != b { 1.0 } else { 0.0 }),
    ];
    for (name, result_class, op) in binary {
        let (ids, value) = (ids.clone(), value.clone());
        fake = fake.method(name, move |args| {
            let rhs = value_of(arg(args, 0)?)?;
            let lhs = value.borrow().clone();
            Ok(vertex(&ids, result_class, combine(&lhs, &rhs, op)?).into())
        });
    }

    let unary: [(&str, &str, fn(f64) -> f64); 5] = [
        ("unaryMinus", "DoubleUnaryOpLambda", |a| -a),
        ("abs", "AbsVertex", f64::abs),
        ("floor", "FloorVertex", f64::floor),
        ("ceil", "CeilVertex", f64::ceil),
        ("round", "RoundVertex", f64::round),
    ];
    for (name, result_class, op) in unary {
        let (ids, value) = (ids.clone(), value.clone());
        fake = fake.method(name, move |_| {
            let result = value.borrow().map(op);
            Ok(vertex(&ids, result_class, result).into())
        });
    }

    fake.handle()
}

fn label(name: String, namespace: Vec<String>) -> RemoteHandle {
    let qualified = namespace
        .iter()
        .rev()
        .chain(std::iter::once(&name))
        .cloned()
        .collect::<Vec<_>>()
        .join(".");
    let unqualified = name.clone();

    FakeObject::new("VertexLabel")
        .method("getQualifiedName", move |_| Ok(qualified.clone().into()))
        .method("getUnqualifiedName", move |_| Ok(unqualified.clone().into()))
        .method("withExtraNamespace", move |args| {
            let outer = arg(args, 0)?
                .as_str()
                .ok_or_else(|| engine_error("java.lang.ClassCastException", "namespace"))?;
            let mut namespace = namespace.clone();
            namespace.push(outer.to_string());
            Ok(label(name.clone(), namespace).into())
        })
        .handle()
}

fn qualified_name(label: &RemoteValue) -> EngineResult<Option<String>> {
    match label {
        RemoteValue::Null => Ok(None),
        other => Ok(call(&object(other)?, "getQualifiedName")?
            .as_str()
            .map(str::to_string)),
    }
}

fn is_observed(vertex: &RemoteValue) -> EngineResult<bool> {
    Ok(matches!(call(&object(vertex)?, "isObserved")?, RemoteValue::Bool(true)))
}

fn network(vertices: Vec<RemoteValue>) -> RemoteHandle {
    let vertices = Rc::new(vertices);

    let filtered = |keep: fn(bool) -> bool| {
        let vertices = vertices.clone();
        move |_: &[RemoteValue]| -> EngineResult<RemoteValue> {
            let mut selected = Vec::new();
            for v in vertices.iter() {
                if keep(is_observed(v)?) {
                    selected.push(v.clone());
                }
            }
            Ok(list("ArrayList", selected).into())
        }
    };

    let by_label = vertices.clone();
    FakeObject::new("BayesianNetwork")
        .method("getLatentOrObservedVertices", filtered(|_| true))
        .method("getTopLevelLatentOrObservedVertices", filtered(|_| true))
        .method("getLatentVertices", filtered(|observed| !observed))
        .method("getTopLevelLatentVertices", filtered(|observed| !observed))
        .method("getContinuousLatentVertices", filtered(|observed| !observed))
        .method("getDiscreteLatentVertices", filtered(|_| false))
        .method("getObservedVertices", filtered(|observed| observed))
        .method("getTopLevelObservedVertices", filtered(|observed| observed))
        .method("probeForNonZeroProbability", |_| Ok(RemoteValue::Null))
        .method("getVertexByLabel", move |args| {
            let wanted = qualified_name(arg(args, 0)?)?;
            for v in by_label.iter() {
                if qualified_name(&call(&object(v)?, "getLabel")?)? == wanted {
                    return Ok(v.clone());
                }
            }
            Ok(RemoteValue::Null)
        })
        .handle()
}

fn vertex_samples(values: Values, count: usize) -> RemoteHandle {
    let (averages, mode, each) = (values.clone(), values.clone(), values);
    FakeObject::new("DoubleVertexSamples")
        .method("getAverages", move |_| Ok(tensor(&averages).into()))
        .method("getMode", move |_| Ok(tensor(&mode).into()))
        .method("asList", move |_| {
            let samples = (0..count).map(|_| RemoteValue::Object(tensor(&each))).collect();
            Ok(list("ArrayList", samples).into())
        })
        .handle()
}

fn network_state(snapshot: Rc<Vec<(RemoteValue, Values)>>) -> RemoteHandle {
    let ids = snapshot.clone();
    FakeObject::new("SimpleNetworkState")
        .method("get", move |args| {
            let vertex = arg(args, 0)?;
            snapshot
                .iter()
                .find(|(v, _)| v == vertex)
                .map(|(_, values)| RemoteValue::Double(values.data[0]))
                .ok_or_else(|| engine_error("java.lang.IllegalArgumentException", "vertex not sampled"))
        })
        .method("getVertexIds", move |_| {
            let ids = ids
                .iter()
                .map(|(v, _)| call(&object(v)?, "getId"))
                .collect::<EngineResult<Vec<_>>>()?;
            Ok(list("HashSet", ids).into())
        })
        .handle()
}

fn sampled(
    snapshot: &[(RemoteValue, Values)],
    args: &[RemoteValue],
    count: usize,
) -> EngineResult<RemoteValue> {
    let vertex = arg(args, 0)?;
    snapshot
        .iter()
        .find(|(v, _)| v == vertex)
        .map(|(_, values)| RemoteValue::Object(vertex_samples(values.clone(), count)))
        .ok_or_else(|| engine_error("java.lang.IllegalArgumentException", "vertex not sampled"))
}

fn count_arg(args: &[RemoteValue]) -> EngineResult<usize> {
    Ok(usize::try_from(arg(args, 0)?.as_i64().unwrap_or(0)).unwrap_or(0))
}

fn network_samples(snapshot: Rc<Vec<(RemoteValue, Values)>>, count: usize) -> RemoteHandle {
    let (get, get_double) = (snapshot.clone(), snapshot.clone());
    let (dropped, down, state) = (snapshot.clone(), snapshot.clone(), snapshot);

    FakeObject::new("NetworkSamples")
        .method("size", move |_| Ok(RemoteValue::Int(count as i64)))
        .method("get", move |args| sampled(&get, args, count))
        .method("getDoubleTensorSamples", move |args| sampled(&get_double, args, count))
        .method("drop", move |args| {
            let n = count_arg(args)?;
            Ok(network_samples(dropped.clone(), count.saturating_sub(n)).into())
        })
        .method("downSample", move |args| {
            let interval = count_arg(args)?.max(1);
            Ok(network_samples(down.clone(), (count + interval - 1) / interval).into())
        })
        .method("getNetworkState", move |_| Ok(network_state(state.clone()).into()))
        .handle()
}

fn sampler_class(name: &'static str) -> RemoteHandle {
    FakeObject::new("Class")
        .method("withDefaultConfig", move |_| {
            Ok(FakeObject::new(name)
                .method("getPosteriorSamples", |args| {
                    let vertices = items(call(&object(arg(args, 1)?)?, "toArray")?)?;
                    let count = usize::try_from(arg(args, 2)?.as_i64().unwrap_or(0)).unwrap_or(0);
                    let snapshot = vertices
                        .into_iter()
                        .map(|v| value_of(&v).map(|values| (v, values)))
                        .collect::<EngineResult<Vec<_>>>()?;
                    Ok(network_samples(Rc::new(snapshot), count).into())
                })
                .handle()
                .into())
        })
        .handle()
}

/// Engine double implementing the gateway
#[derive(Debug, Default)]
pub struct FakeEngine {
    ids: Ids,
}

impl Gateway for FakeEngine {
    fn construct(&self, class: &str, args: &[RemoteValue]) -> EngineResult<RemoteHandle> {
        match class {
            classes::CONSTANT_DOUBLE_VERTEX => {
                let values = read_tensor(&object(arg(args, 0)?)?)?;
                Ok(vertex(&self.ids, "ConstantDoubleVertex", values))
            }
            GAUSSIAN_VERTEX => {
                let mu = value_of(arg(args, 0)?)?;
                Ok(vertex(&self.ids, "GaussianVertex", mu))
            }
            classes::VERTEX_LABEL => {
                let name = arg(args, 0)?.as_str().unwrap_or_default().to_string();
                let namespace = match args.get(1) {
                    Some(array) => items(call(&object(array)?, "toArray")?)?
                        .iter()
                        .filter_map(|s| s.as_str().map(str::to_string))
                        .collect(),
                    None => Vec::new(),
                };
                Ok(label(name, namespace))
            }
            classes::BAYESIAN_NETWORK => {
                let vertices = items(call(&object(arg(args, 0)?)?, "toArray")?)?;
                Ok(network(vertices))
            }
            other => Err(engine_error("java.lang.ClassNotFoundException", other)),
        }
    }

    fn class_ref(&self, class: &str) -> EngineResult<RemoteHandle> {
        match class {
            classes::DOUBLE_TENSOR => Ok(FakeObject::new("Class")
                .method("create", |args| {
                    let data = items(arg(args, 0)?.clone())?
                        .iter()
                        .filter_map(RemoteValue::as_f64)
                        .collect();
                    let shape = items(arg(args, 1)?.clone())?
                        .iter()
                        .filter_map(RemoteValue::as_i64)
                        .collect();
                    Ok(tensor(&Values { data, shape }).into())
                })
                .handle()),
            classes::NUTS => Ok(sampler_class("NUTS")),
            classes::METROPOLIS_HASTINGS => Ok(sampler_class("MetropolisHastings")),
            classes::HAMILTONIAN => Ok(sampler_class("Hamiltonian")),
            other => Err(engine_error("java.lang.ClassNotFoundException", other)),
        }
    }

    fn to_remote_list(&self, items: Vec<RemoteValue>) -> EngineResult<RemoteHandle> {
        Ok(list("ArrayList", items))
    }

    fn to_remote_string_array(&self, items: &[String]) -> EngineResult<RemoteHandle> {
        let strings = items.iter().cloned().map(RemoteValue::Str).collect();
        Ok(list("String[]", strings))
    }
}
