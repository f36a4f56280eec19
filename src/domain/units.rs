use phf::phf_map;

use crate::domain::model::Category;

/// One entry of the conversion table: how many of this unit make up one base
/// quantity (meter, liter or gram) of its category.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub factor: f64,
    pub category: Category,
}

// Note: `Weight` tags the liquid units and `Volume` the mass units. The tags
// are printed in mismatch errors, so the grouping must stay exactly as-is.
static UNITS: phf::Map<&'static str, UnitDef> = phf_map! {
    "m" => UnitDef { symbol: "m", factor: 1.0, category: Category::Distance },
    "cm" => UnitDef { symbol: "cm", factor: 100.0, category: Category::Distance },
    "mm" => UnitDef { symbol: "mm", factor: 1000.0, category: Category::Distance },
    "km" => UnitDef { symbol: "km", factor: 0.001, category: Category::Distance },
    "in" => UnitDef { symbol: "in", factor: 39.3701, category: Category::Distance },
    "ft" => UnitDef { symbol: "ft", factor: 3.280841666667, category: Category::Distance },
    "yd" => UnitDef { symbol: "yd", factor: 1.0936138888889999077, category: Category::Distance },
    "mi" => UnitDef { symbol: "mi", factor: 0.000621371, category: Category::Distance },
    "L" => UnitDef { symbol: "L", factor: 1.0, category: Category::Weight },
    "mL" => UnitDef { symbol: "mL", factor: 1000.0, category: Category::Weight },
    "floz" => UnitDef { symbol: "floz", factor: 33.814, category: Category::Weight },
    "cup" => UnitDef { symbol: "cup", factor: 4.22675, category: Category::Weight },
    "pint" => UnitDef { symbol: "pint", factor: 2.11338, category: Category::Weight },
    "qt" => UnitDef { symbol: "qt", factor: 1.05669, category: Category::Weight },
    "gal" => UnitDef { symbol: "gal", factor: 0.264172, category: Category::Weight },
    "g" => UnitDef { symbol: "g", factor: 1.0, category: Category::Volume },
    "kg" => UnitDef { symbol: "kg", factor: 0.001, category: Category::Volume },
    "mg" => UnitDef { symbol: "mg", factor: 1000.0, category: Category::Volume },
    "oz" => UnitDef { symbol: "oz", factor: 0.035274, category: Category::Volume },
    "lb" => UnitDef { symbol: "lb", factor: 0.00220462, category: Category::Volume },
};

/// Distance units in table order.
pub const DISTANCE_UNITS: [&str; 8] = ["m", "cm", "mm", "km", "in", "ft", "yd", "mi"];
/// Liquid units in table order (tagged `Category::Weight`).
pub const WEIGHT_UNITS: [&str; 7] = ["L", "mL", "floz", "cup", "pint", "qt", "gal"];
/// Mass units in table order (tagged `Category::Volume`).
pub const VOLUME_UNITS: [&str; 5] = ["g", "kg", "mg", "oz", "lb"];

/// Resolves a unit symbol. Symbols are case-sensitive.
pub fn lookup(symbol: &str) -> Option<&'static UnitDef> {
    UNITS.get(symbol)
}

/// Every accepted unit symbol, space separated, in table order. Shown in the
/// invalid-unit error messages.
pub fn unit_list() -> String {
    DISTANCE_UNITS
        .iter()
        .chain(WEIGHT_UNITS.iter())
        .chain(VOLUME_UNITS.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_unit_resolves_to_its_group() {
        let groups = [
            (&DISTANCE_UNITS[..], Category::Distance),
            (&WEIGHT_UNITS[..], Category::Weight),
            (&VOLUME_UNITS[..], Category::Volume),
        ];
        for (symbols, category) in groups {
            for symbol in symbols {
                let def = lookup(symbol).unwrap();
                assert_eq!(def.symbol, *symbol);
                assert_eq!(def.category, category);
            }
        }
    }

    #[test]
    fn table_and_lists_agree_on_size() {
        let listed = DISTANCE_UNITS.len() + WEIGHT_UNITS.len() + VOLUME_UNITS.len();
        assert_eq!(UNITS.len(), listed);
    }

    #[test]
    fn each_category_has_exactly_one_base_unit() {
        let groups = [
            (&DISTANCE_UNITS[..], "m"),
            (&WEIGHT_UNITS[..], "L"),
            (&VOLUME_UNITS[..], "g"),
        ];
        for (symbols, base) in groups {
            let bases: Vec<&str> = symbols
                .iter()
                .copied()
                .filter(|symbol| lookup(symbol).unwrap().factor == 1.0)
                .collect();
            assert_eq!(bases, vec![base]);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("M").is_none());
        assert!(lookup("ML").is_none());
        assert!(lookup("Km").is_none());
    }

    #[test]
    fn unknown_symbols_do_not_resolve() {
        assert!(lookup("xyz").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("meter").is_none());
    }

    #[test]
    fn unit_list_is_in_table_order() {
        assert_eq!(
            unit_list(),
            "m cm mm km in ft yd mi L mL floz cup pint qt gal g kg mg oz lb"
        );
    }
}
