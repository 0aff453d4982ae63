// src/model/elements.rs

/// Element symbols ordered by atomic number. An element's ID is its index
/// here, i.e. atomic number minus one.
pub const ELEMENT_SYMBOLS: [&str; 112] = [
    // --- Period 1 ---
    "H", "He",
    // --- Period 2 ---
    "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    // --- Period 3 ---
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar",
    // --- Period 4 ---
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr",
    // --- Period 5 ---
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe",
    // --- Period 6 ---
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy",
    "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt",
    "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn",
    // --- Period 7 ---
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf",
    "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn",
];

/// Returns the element ID (Z - 1) for a symbol, case-sensitive.
pub fn element_id(symbol: &str) -> Option<usize> {
    ELEMENT_SYMBOLS.iter().position(|&s| s == symbol)
}

pub fn element_symbol(id: usize) -> Option<&'static str> {
    ELEMENT_SYMBOLS.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(element_id("H"), Some(0));
        assert_eq!(element_id("Cu"), Some(28));
        assert_eq!(element_id("Zr"), Some(39));
        assert_eq!(element_id("Cn"), Some(111));
        assert_eq!(element_id("Xx"), None);
        assert_eq!(element_id("cu"), None);
    }

    #[test]
    fn test_round_trip_ids() {
        for (id, sym) in ELEMENT_SYMBOLS.iter().enumerate() {
            assert_eq!(element_id(sym), Some(id));
            assert_eq!(element_symbol(id), Some(*sym));
        }
        assert_eq!(element_symbol(112), None);
    }
}
