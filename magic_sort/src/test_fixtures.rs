//! Shared record fixtures for unit tests.
//!
//! `DummyClass1` through `DummyClass4` form a cycle (`DummyClass4` points
//! back at `DummyClass1`) so deep self-referential paths can be exercised.

use crate::execution::comparisons::compare_values;
use crate::resolution::{resolve, AccessorMap};
use crate::types::SortSpec;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct DummyClass1 {
    pub(crate) property1: i32,
    pub(crate) property2: String,
    pub(crate) property3: f64,
    pub(crate) property4: Option<Box<DummyClass2>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DummyClass2 {
    pub(crate) property_x: i64,
    pub(crate) property_y: String,
    pub(crate) property_z: f64,
    pub(crate) property_w: Option<Box<DummyClass3>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DummyClass3 {
    pub(crate) property_a: i32,
    pub(crate) property_b: String,
    pub(crate) property_c: f64,
    pub(crate) property_d: Option<Box<DummyClass4>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DummyClass4 {
    pub(crate) property_i: i32,
    pub(crate) property_j: String,
    pub(crate) property_k: Option<Box<DummyClass1>>,
}

impl DummyClass1 {
    pub fn new(property1: i32, property2: &str, property3: f64, property4: Option<DummyClass2>) -> Self {
        Self {
            property1,
            property2: property2.to_string(),
            property3,
            property4: property4.map(Box::new),
        }
    }
}

impl DummyClass2 {
    pub fn new(property_x: i64, property_y: &str, property_z: f64, property_w: Option<DummyClass3>) -> Self {
        Self {
            property_x,
            property_y: property_y.to_string(),
            property_z,
            property_w: property_w.map(Box::new),
        }
    }
}

impl DummyClass3 {
    pub fn new(property_a: i32, property_b: &str, property_c: f64, property_d: Option<DummyClass4>) -> Self {
        Self {
            property_a,
            property_b: property_b.to_string(),
            property_c,
            property_d: property_d.map(Box::new),
        }
    }
}

impl DummyClass4 {
    pub fn new(property_i: i32, property_j: &str, property_k: Option<DummyClass1>) -> Self {
        Self {
            property_i,
            property_j: property_j.to_string(),
            property_k: property_k.map(Box::new),
        }
    }
}

crate::sortable_record!(DummyClass1 {
    values {
        "Property1" => property1,
        "Property2" => property2,
        "Property3" => property3,
    }
    nested {
        "Property4" => property4: Box<DummyClass2>,
    }
});

crate::sortable_record!(DummyClass2 {
    values {
        "PropertyX" => property_x,
        "PropertyY" => property_y,
        "PropertyZ" => property_z,
    }
    nested {
        "PropertyW" => property_w: Box<DummyClass3>,
    }
});

crate::sortable_record!(DummyClass3 {
    values {
        "PropertyA" => property_a,
        "PropertyB" => property_b,
        "PropertyC" => property_c,
    }
    nested {
        "PropertyD" => property_d: Box<DummyClass4>,
    }
});

crate::sortable_record!(DummyClass4 {
    values {
        "PropertyI" => property_i,
        "PropertyJ" => property_j,
    }
    nested {
        "PropertyK" => property_k: Box<DummyClass1>,
    }
});

/// Record whose `Property4.PropertyW.PropertyD.PropertyJ` is `j` and whose
/// recursive `...PropertyK.Property4.PropertyW.PropertyD.PropertyI` is `inner_i`
pub fn deep_record(property1: i32, j: &str, inner_i: i32) -> DummyClass1 {
    let inner = DummyClass1::new(
        property1,
        "inner",
        0.0,
        Some(DummyClass2::new(
            0,
            "inner",
            0.0,
            Some(DummyClass3::new(0, "inner", 0.0, Some(DummyClass4::new(inner_i, "inner", None)))),
        )),
    );

    DummyClass1::new(
        property1,
        j,
        f64::from(property1),
        Some(DummyClass2::new(
            i64::from(property1),
            j,
            0.5,
            Some(DummyClass3::new(property1, j, 0.25, Some(DummyClass4::new(property1, j, Some(inner))))),
        )),
    )
}

/// Accessor registrations mirroring the `Sortable` shape, leaves only
pub fn dummy_class1_accessors() -> AccessorMap<DummyClass1> {
    let class4 = AccessorMap::<DummyClass4>::for_type()
        .register("PropertyI", |r: &DummyClass4| r.property_i)
        .register("PropertyJ", |r: &DummyClass4| r.property_j.clone());

    let class3 = AccessorMap::<DummyClass3>::for_type()
        .register("PropertyA", |r: &DummyClass3| r.property_a)
        .register("PropertyB", |r: &DummyClass3| r.property_b.clone())
        .register("PropertyC", |r: &DummyClass3| r.property_c)
        .mount("PropertyD", &class4, |r: &DummyClass3| r.property_d.as_deref());

    let class2 = AccessorMap::<DummyClass2>::for_type()
        .register("PropertyX", |r: &DummyClass2| r.property_x)
        .register("PropertyY", |r: &DummyClass2| r.property_y.clone())
        .register("PropertyZ", |r: &DummyClass2| r.property_z)
        .mount("PropertyW", &class3, |r: &DummyClass2| r.property_w.as_deref());

    AccessorMap::<DummyClass1>::for_type()
        .register("Property1", |r: &DummyClass1| r.property1)
        .register("Property2", |r: &DummyClass1| r.property2.clone())
        .register("Property3", |r: &DummyClass1| r.property3)
        .mount("Property4", &class2, |r: &DummyClass1| r.property4.as_deref())
}

/// Deterministic linear congruential generator
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

const WORDS: [&str; 6] = ["alpha", "Bravo", "charlie", "delta", "Echo", "foxtrot"];

/// `count` records with distinct `Property1` values 1..=count in shuffled
/// order. Nested chains are present down to `DummyClass4`; values repeat
/// often enough to exercise tie breaking.
pub fn generate_records(count: usize, seed: u64) -> Vec<DummyClass1> {
    let mut rng = Lcg(seed);

    let mut ids: Vec<i32> = (1..=count as i32).collect();
    for i in (1..ids.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        ids.swap(i, j);
    }

    ids.into_iter()
        .map(|id| {
            let word = |rng: &mut Lcg| WORDS[rng.below(WORDS.len() as u64) as usize];
            let class4 = DummyClass4::new(rng.below(5) as i32, word(&mut rng), None);
            let class3 = DummyClass3::new(
                rng.below(4) as i32 - 2,
                word(&mut rng),
                rng.below(8) as f64 / 4.0,
                Some(class4),
            );
            let class2 = DummyClass2::new(
                rng.below(1000) as i64,
                word(&mut rng),
                rng.below(6) as f64 * 1.5,
                Some(class3),
            );
            DummyClass1::new(id, word(&mut rng), rng.below(100) as f64 / 10.0, Some(class2))
        })
        .collect()
}

/// Like [`generate_records`], but some nested chains are cut short:
/// roughly a third of the records have no `Property4`, and others lose
/// `PropertyW` or `PropertyD` further down.
pub fn generate_sparse_records(count: usize, seed: u64) -> Vec<DummyClass1> {
    let mut rng = Lcg(seed ^ 0x5eed);
    let mut records = generate_records(count, seed);

    for record in &mut records {
        match rng.below(6) {
            0 | 1 => record.property4 = None,
            2 => {
                if let Some(class2) = record.property4.as_mut() {
                    class2.property_w = None;
                }
            }
            3 => {
                if let Some(class3) = record.property4.as_mut().and_then(|c| c.property_w.as_mut()) {
                    class3.property_d = None;
                }
            }
            _ => {}
        }
    }

    records
}

/// `Property1` of each record, in order
pub fn ids(records: &[DummyClass1]) -> Vec<i32> {
    records.iter().map(|r| r.property1).collect()
}

/// Assert every adjacent pair of `records` is ordered under `spec`
pub fn assert_ordered(records: &[DummyClass1], spec: &SortSpec) {
    for (index, pair) in records.windows(2).enumerate() {
        assert_ne!(
            judge(&pair[0], &pair[1], spec),
            Ordering::Greater,
            "records {} and {} out of order under \"{}\"",
            index,
            index + 1,
            spec
        );
    }
}

fn judge(left: &DummyClass1, right: &DummyClass1, spec: &SortSpec) -> Ordering {
    for entry in spec {
        let left_value = resolve(left, &entry.key);
        let right_value = resolve(right, &entry.key);

        // Absent ties only with absent and orders before any value
        let ordering = compare_values(&left_value, &right_value).expect("homogeneous fixture values");
        match entry.direction.apply(ordering) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
    Ordering::Equal
}
