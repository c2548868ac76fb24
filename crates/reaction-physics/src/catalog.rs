//! Species catalogs and the static reaction table
//!
//! The two species tables and the reaction table are literal data,
//! duplicates included. [`ReactionCatalog::standard`] applies
//! first-insert-wins at both nesting levels: a repeated reactant's entire
//! later block is discarded, and a repeated partner keeps its first product.
//! So e.g. the second `"S"` block contributes nothing and `N2 + O2` yields
//! `NO` rather than `NO2`.

use std::collections::HashMap;
use std::str::FromStr;

/// Chemical element species: (symbol, mass). Mass doubles as spawn size.
pub const ELEMENTS: &[(&str, f32)] = &[
    ("H", 10.0), ("He", 11.0), ("Li", 12.0), ("Be", 13.0), ("B", 14.0), ("C", 15.0),
    ("N", 16.0), ("O", 17.0), ("F", 18.0), ("Ne", 19.0), ("Na", 20.0), ("Mg", 21.0),
    ("Al", 22.0), ("Si", 23.0), ("P", 24.0), ("S", 25.0), ("Cl", 26.0), ("Ar", 27.0),
    ("K", 28.0), ("Ca", 29.0), ("Sc", 30.0), ("Ti", 31.0), ("V", 32.0), ("Cr", 33.0),
    ("Mn", 34.0), ("Fe", 35.0), ("Co", 36.0), ("Ni", 37.0), ("Cu", 38.0), ("Zn", 39.0),
    ("Ga", 40.0), ("Ge", 41.0), ("As", 42.0), ("Se", 43.0), ("Br", 44.0), ("Kr", 45.0),
    ("Rb", 46.0), ("Sr", 47.0), ("Y", 48.0), ("Zr", 49.0), ("Nb", 50.0), ("Mo", 51.0),
    ("Tc", 52.0), ("Ru", 53.0), ("Rh", 54.0), ("Pd", 55.0), ("Ag", 56.0), ("Cd", 57.0),
    ("In", 58.0), ("Sn", 59.0), ("Sb", 60.0), ("Te", 61.0), ("I", 62.0), ("Xe", 63.0),
    ("Cs", 64.0), ("Ba", 65.0), ("La", 66.0), ("Ce", 67.0), ("Pr", 68.0), ("Nd", 69.0),
    ("Pm", 70.0), ("Sm", 71.0), ("Eu", 72.0), ("Gd", 73.0), ("Tb", 74.0), ("Dy", 75.0),
    ("Ho", 76.0), ("Er", 77.0), ("Tm", 78.0), ("Yb", 79.0), ("Lu", 80.0), ("Hf", 81.0),
    ("Ta", 82.0), ("W", 83.0), ("Re", 84.0), ("Os", 85.0), ("Ir", 86.0), ("Pt", 87.0),
    ("Au", 88.0), ("Hg", 89.0), ("Tl", 90.0), ("Pb", 91.0), ("Bi", 92.0), ("Po", 93.0),
    ("At", 94.0), ("Rn", 95.0), ("Fr", 96.0), ("Ra", 97.0), ("Ac", 98.0), ("Th", 99.0),
    ("Pa", 100.0), ("U", 101.0), ("Np", 102.0), ("Pu", 103.0), ("Am", 104.0), ("Cm", 105.0),
    ("Bk", 106.0), ("Cf", 107.0), ("Es", 108.0), ("Fm", 109.0), ("Md", 110.0), ("No", 111.0),
    ("Lr", 112.0), ("Rf", 113.0), ("Db", 114.0), ("Sg", 115.0), ("Bh", 116.0), ("Hs", 117.0),
    ("Mt", 118.0), ("Ds", 119.0), ("Rg", 120.0), ("Cn", 121.0), ("Nh", 122.0), ("Fl", 123.0),
    ("Mc", 124.0), ("Lv", 125.0), ("Ts", 126.0), ("Og", 127.0),
];

/// Fundamental particle species: (label, mass). All spawn at the same size.
pub const FUNDAMENTALS: &[(&str, f32)] = &[
    ("Up quark", 10.0),
    ("Down quark", 10.0),
    ("Charm quark", 10.0),
    ("Strange quark", 10.0),
    ("Top quark", 10.0),
    ("Bottom quark", 10.0),
    ("Electron", 10.0),
    ("Muon", 10.0),
    ("Tau", 10.0),
    ("Electron neutrino", 10.0),
    ("Muon neutrino", 10.0),
    ("Tau neutrino", 10.0),
    ("Photon", 10.0),
    ("Gluon", 10.0),
    ("W boson", 10.0),
    ("Z boson", 10.0),
    ("Graviton", 10.0),
    ("Higgs boson", 10.0),
    ("Proton", 10.0),
    ("Neutron", 10.0),
    ("Positron (anti-electron)", 10.0),
    ("Electron antineutrino", 10.0),
    ("Antiproton", 10.0),
    ("Antineutron", 10.0),
];

/// Literal reaction data in insertion order: (reactant, [(partner, product)]).
///
/// Duplicated outer blocks and duplicated partners are left in place;
/// first-insert-wins is applied at build time rather than by editing the
/// data.
const REACTION_TABLE: &[(&str, &[(&str, &str)])] = &[
    ("Li", &[
        ("Al", "LiAl"), ("Br", "LiBr"), ("Cl", "LiCl"), ("F", "LiF"), ("H", "LiH"),
        ("I", "LiI"), ("Mg", "LiMg"), ("Li", "Li2"),
    ]),
    ("Be", &[("O", "BeO"), ("S", "BeS"), ("Se", "BeSe"), ("Te", "BeTe"), ("O2", "BeO2")]),
    ("B", &[
        ("N", "BN"), ("P", "BP"), ("As", "BAs"), ("S", "BS"), ("Si", "BSi"), ("Fe", "FeB"),
        ("Ni", "NiB"), ("Co", "CoB"),
    ]),
    ("C", &[
        ("N", "CN"), ("C", "C2"), ("Si", "SiC"), ("Ti", "TiC"), ("Zr", "ZrC"), ("Nb", "NbC"),
        ("W", "WC"), ("V", "VC"),
    ]),
    ("N", &[
        ("N", "N2"), ("Si", "SiC"), ("Ti", "TiC"), ("Zr", "ZrC"), ("Nb", "NbC"), ("W", "WC"),
        ("V", "VC"), ("Al", "AlN"), ("Cr", "CrN"), ("Ga", "GaN"), ("In", "InN"), ("Sc", "ScN"),
        ("Y", "YN"),
    ]),
    ("H2", &[
        ("O2", "H2O"), ("Ba", "BaH2"), ("Be", "BeH2"), ("Fe", "FeH2"), ("Ca", "CaH2"),
        ("Mg", "MgH2"), ("S", "H2S"), ("Se", "H2Se"), ("Te", "H2Te"), ("Zn", "ZnH2"),
    ]),
    ("O2", &[
        ("C", "CO2"), ("S", "SO2"), ("Se", "SeO2"), ("Te", "TeO2"), ("Si", "SiO2"),
        ("Ti", "TiO2"), ("V", "VO2"), ("Mn", "MnO2"), ("O", "O3"),
    ]),
    ("N2", &[("O2", "NO"), ("O2", "NO2"), ("O2", "N2O")]),
    ("Ba", &[("H2", "BaH2")]),
    ("Ca", &[("H2", "CaH2")]),
    ("Fe", &[
        ("Fe", "Fe2"), ("H2", "FeH2"), ("F2", "FeF2"), ("Cl2", "FeCl2"), ("Br2", "FeBr2"),
        ("I2", "FeI2"), ("N", "FeN"), ("B", "FeB"), ("Al", "FeAl"), ("Cu", "CuFe"),
    ]),
    ("Fe2", &[("Zn", "ZnFe2"), ("Ni", "NiFe2")]),
    ("Mg", &[
        ("H2", "MgH2"), ("O", "MgO"), ("F2", "MgF2"), ("Cl2", "MgCl2"), ("Br2", "MgBr2"),
        ("I2", "MgI2"), ("B2", "MgB2"), ("Al2", "MgAl2"), ("Cu", "CuMg"), ("Mg", "Mg2"),
        ("Na", "NaMg"), ("K", "KMg"), ("Rb", "RbMg"), ("Cs", "CsMg"),
    ]),
    ("Mg2", &[("Zn", "ZnMg2"), ("Ni", "NiMg2")]),
    ("O", &[
        ("H2", "H2O"), ("O", "O2"), ("F2", "OF2"), ("Cl2", "OCl2"), ("Br2", "OBr2"),
        ("O", "OI2"), ("C", "CO"), ("Mg", "MgO"), ("Ca", "CaO"), ("Se", "SeO2"), ("Fe", "FeO"),
        ("Cu", "CuO"), ("Zn", "ZnO"), ("Ni", "NiO"), ("Mn", "MnO"),
    ]),
    ("S", &[
        ("S", "S2"), ("H2", "H2S"), ("O2", "SO2"), ("F2", "SF2"), ("Cl2", "SCl2"),
        ("Br2", "SBr2"), ("I2", "SI2"), ("N", "NS"), ("B", "BS"), ("Cu", "CuS"), ("Zn", "ZnS"),
        ("Ni", "NiS"), ("Na2", "Na2S"), ("K2", "K2S"), ("Rb2", "Rb2S"), ("Cs2", "Cs2S"),
        ("Li2", "Li2S"), ("Mg", "MgS"), ("Ca", "CaS"), ("Sr", "SrS"), ("Ba", "BaS"),
    ]),
    ("S2", &[("C", "CS2")]),
    ("Se", &[
        ("H2", "H2Se"), ("O2", "SeO2"), ("F2", "SeF2"), ("Cl2", "SeCl2"), ("Br2", "SeBr2"),
        ("I2", "SeI2"), ("N2", "SeN2"), ("Se", "Se2"), ("B", "BSe"), ("Cu", "CuSe"),
        ("Zn", "ZnSe"), ("Ni", "NiSe"), ("Na2", "Na2Se"), ("K2", "K2Se"), ("Rb2", "Rb2Se"),
        ("Cs2", "Cs2Se"), ("Li2", "Li2Se"), ("Mg", "MgSe"), ("Ca", "CaSe"), ("Sr", "SrSe"),
        ("Ba", "BaSe"),
    ]),
    ("Se2", &[("C", "CSe2")]),
    ("Te", &[
        ("Te", "Te2"), ("H2", "H2Te"), ("O2", "TeO2"), ("N2", "TeN2"), ("B", "BTe"),
        ("Cu", "CuTe"), ("Zn", "ZnTe"), ("Ni", "NiTe"), ("Na2", "Na2Te"), ("K2", "K2Te"),
        ("Rb2", "Rb2Te"), ("Cs", "Cs2Te"), ("Li2", "Li2Te"), ("Mg", "MgTe"), ("Ca", "CaTe"),
        ("Sr", "SrTe"), ("Ba", "BaTe"),
    ]),
    ("Te2", &[("C", "CTe2")]),
    ("Zn", &[
        ("H", "ZnH2"), ("O", "ZnO"), ("F2", "ZnF2"), ("Cl2", "ZnCl2"), ("Br2", "ZnBr2"),
        ("I2", "ZnI2"), ("B2", "ZnB2"), ("Al2", "ZnAl2"), ("Cu", "CuZn"), ("Ni", "NiZn"),
        ("Na", "Na2Zn"), ("K2", "K2Zn"), ("Rb2", "Rb2Zn"), ("Cs2", "Cs2Zn"), ("Li", "LiZn"),
        ("Mg", "MgZn"), ("Ca", "CaZn"),
    ]),
    ("Na", &[
        ("Na", "Na2"), ("H", "NaH"), ("F", "NaF"), ("Cl", "NaCl"), ("Br", "NaBr"),
        ("I", "NaI"), ("B", "NaB"), ("Al", "NaAl"), ("Cu", "CuNa"), ("K", "NaK"),
        ("Rb", "NaRb"), ("Cs", "NaCs"), ("Li", "NaLi"),
    ]),
    ("Na2", &[("O", "Na2O"), ("Zn", "ZnNa2"), ("Ni", "NiNa2"), ("He", "Na2He"), ("O", "Na2O")]),
    ("F", &[
        ("F", "F2"), ("H", "HF"), ("Cl", "FCl"), ("Br", "FBr"), ("I", "FI"), ("Cu", "CuF"),
        ("Na", "NaF"), ("K", "KF"), ("Li", "LiF"), ("Rb", "RbF"), ("Cs", "CsF"),
    ]),
    ("F2", &[("O", "OF2"), ("Zn", "ZnF2"), ("Ni", "NiF2"), ("Mn", "MnF2")]),
    ("Cl", &[
        ("Cl", "Cl2"), ("H", "HCl"), ("O2", "ClO2"), ("F", "ClF"), ("Br", "ClBr"), ("I", "Cl"),
        ("Cu", "CuCl"), ("Na", "NaCl"), ("K", "KCl"), ("Li", "LiCl"), ("Rb", "RbCl"),
        ("Cs", "CsCl"),
    ]),
    ("Cl2", &[
        ("O", "OCl2"), ("S", "Cl2S"), ("Se", "Cl2Se"), ("Te", "Cl2Te"), ("Cl", "Cl2"),
        ("Zn", "ZnCl2"), ("Ni", "NiCl2"), ("Mn", "MnCl2"),
    ]),
    ("Br", &[
        ("Br", "Br2"), ("Br", "Br2"), ("H", "HBr"), ("F", "BrF"), ("Cl", "ClBr"), ("I", "BrI"),
        ("N", "BrNO"), ("Cu", "CuBr"), ("Na", "NaBr"), ("K", "KBr"), ("Li", "LiBr"),
        ("Rb", "RbBr"), ("Cs", "CsBr"),
    ]),
    ("Br2", &[("O", "OBr2"), ("Zn", "ZnBr2"), ("Ni", "NiBr2")]),
    ("I", &[
        ("H", "HI"), ("F", "IF"), ("Cl", "ClI"), ("Br", "BrI"), ("Cu", "CuI"), ("Na", "NaI"),
        ("K", "KI"), ("Li", "LiI"), ("Rb", "RbI"), ("Cs", "CsI"),
    ]),
    ("I2", &[("O", "OI2"), ("Zn", "ZnI2"), ("Ni", "NiI2")]),
    ("Li2", &[("O", "Li2O"), ("Zn", "ZnLi2"), ("Ni", "NiLi2")]),
    ("K", &[
        ("H", "KH"), ("F", "KF"), ("Cl", "KCl"), ("Br", "KBr"), ("I", "KI"), ("B", "KB"),
        ("Al", "KAl"), ("Cu", "CuK"), ("Na", "NaK"), ("Li", "LiK"), ("Rb", "RbK"),
        ("Cs", "CsK"),
    ]),
    ("K2", &[("O", "K2O"), ("Zn", "ZnK2"), ("Ni", "NiK2")]),
    ("Rb", &[
        ("H", "RbH"), ("F", "RbF"), ("Cl", "RbCl"), ("Br", "RbBr"), ("I", "RbI"), ("B", "RbB"),
        ("Al", "RbAl"), ("Cu", "CuRb"), ("Na", "NaRb"), ("Li", "LiRb"), ("K", "KRb"),
        ("Cs", "CsRb"),
    ]),
    ("Rb2", &[("O", "Rb2O"), ("Zn", "ZnRb2"), ("Ni", "NiRb2")]),
    ("Cs", &[
        ("H", "CsH"), ("F", "CsF"), ("Cl", "CsCl"), ("Br", "CsBr"), ("I", "CsI"), ("B", "CsB"),
        ("Al", "CsAl"), ("Cu", "CuCs"), ("Na", "NaCs"), ("Li", "LiCs"), ("K", "KCs"),
        ("Rb", "RbCs"),
    ]),
    ("Cs2", &[("O", "Cs2O"), ("Zn", "ZnCs2"), ("Ni", "NiCs2")]),
    ("P", &[
        ("N", "PN"), ("B", "PB"), ("Al", "PAl"), ("Cu", "CuP"), ("Zn", "ZnP"), ("Ni", "NiP"),
        ("Na", "NaP"), ("K", "KP"), ("Rb", "RbP"), ("Cs", "CsP"),
    ]),
    ("S", &[
        ("H2", "H2S"), ("O2", "SO2"), ("Cl2", "SCl2"), ("Br2", "SBr2"), ("I2", "SI2"),
        ("N2", "SN2"), ("B", "SB"), ("Al2", "SAl2"), ("Cu", "CuS"), ("Zn", "ZnS"),
        ("Ni", "NiS"), ("Na2", "Na2S"), ("K2", "K2S"), ("Rb2", "Rb2S"), ("Cs2", "Cs2S"),
    ]),
    ("Sr", &[
        ("H2", "SrH2"), ("O", "SrO"), ("F2", "SrF2"), ("Cl2", "SrCl2"), ("Br2", "SrBr2"),
        ("I2", "SrI2"), ("B", "SrB"), ("Al2", "SrAl2"), ("Cu", "CuSr"), ("Na", "NaSr"),
        ("K", "KSr"), ("Rb", "RbSr"), ("Cs", "CsSr"),
    ]),
    ("Sr2", &[("Zn", "ZnSr2"), ("Ni", "NiSr2")]),
    ("Sr", &[("Sr", "Sr2")]),
    ("Ra", &[
        ("H", "RaH2"), ("O", "RaO"), ("F2", "RaF2"), ("Cl2", "RaCl2"), ("Br2", "RaBr2"),
        ("I2", "RaI2"), ("B", "RaB"), ("Al2", "RaAl2"), ("Cu", "CuRa"), ("Na", "NaRa"),
        ("K", "KRa"), ("Rb", "RbRa"), ("Cs", "CsRa"),
    ]),
    ("Ra2", &[("Ra", "Ra2"), ("Zn", "ZnRa2"), ("Ni", "NiRa2")]),
    ("Fr", &[
        ("H", "FrH"), ("F", "FrF"), ("Cl", "FrCl"), ("Br", "FrBr"), ("I", "FrI"), ("B", "FrB"),
        ("Al", "FrAl"), ("Cu", "CuFr"), ("Na", "NaFr"), ("Li", "LiFr"), ("K", "KFr"),
        ("Rb", "RbFr"), ("Cs", "CsFr"),
    ]),
    ("Fr", &[("Fr", "Fr2"), ("O", "Fr2O"), ("Zn", "ZnFr2"), ("Ni", "NiFr2")]),
    ("Sc", &[("H2", "ScH2"), ("N", "ScN"), ("B", "ScB"), ("Al", "ScAl"), ("Cu", "CuSc")]),
    ("Sc2", &[("Sc", "Sc2"), ("Zn", "ZnSc2"), ("Ni", "NiSc2")]),
    ("Ra", &[("N", "YN"), ("B", "YB"), ("Al2", "YAl2")]),
    ("Y", &[("Y", "Y2"), ("Zn", "ZnY2"), ("Ni", "NiY2")]),
    ("Ti", &[
        ("H2", "TiH2"), ("O2", "TiO2"), ("N", "TiN"), ("B2", "TiB2"), ("Cu", "CuTi"),
        ("Zn", "ZnTi"), ("Ni", "NiTi"),
    ]),
    ("V", &[("V", "V2"), ("H2", "VH2"), ("N", "VN"), ("B2", "VB2"), ("Cu", "CuV")]),
    ("V", &[("Zn", "ZnV2"), ("Ni", "NiV2")]),
    ("Cr", &[
        ("Cr", "Cr2"), ("H2", "CrH2"), ("N", "CrN"), ("B", "CrB"), ("Al", "CrAl"),
        ("Cu", "CuCr"),
    ]),
    ("Cr2", &[("Zn", "ZnCr2"), ("Ni", "NiCr2")]),
    ("Mn", &[
        ("Mn", "Mn2"), ("H2", "MnH2"), ("O2", "MnO2"), ("Cl2", "MnCl2"), ("Br2", "MnBr2"),
        ("I2", "MnI2"), ("N", "MnN"), ("B", "MnB"), ("Al", "MnAl"), ("Cu", "CuMn"),
    ]),
    ("Mn2", &[("Zn", "ZnMn2"), ("Ni", "NiMn2")]),
    ("Co", &[
        ("Co", "Co2"), ("H2", "CoH2"), ("O", "CoO"), ("F2", "CoF2"), ("Cl2", "CoCl2"),
        ("Br2", "CoBr2"), ("I2", "CoI2"), ("N", "CoN"), ("B", "CoB"), ("Al", "CoAl"),
        ("Cu", "CuCo"), ("Na", "NaCo"), ("K", "KCo"), ("Rb", "RbCo"), ("Cs", "CsCo"),
    ]),
    ("Co2", &[("Zn", "ZnCo2"), ("Ni", "NiCo2")]),
    ("Cu", &[
        ("H2", "CuH2"), ("O", "CuO"), ("F2", "CuF2"), ("Cl2", "CuCl2"), ("Br2", "CuBr2"),
        ("I2", "CuI2"), ("N", "CuN"), ("B", "CuB"), ("Al", "CuAl"), ("Zn", "CuZn"),
        ("Ni", "CuNi"), ("Na", "NaCu"), ("K", "KCu"), ("Rb", "RbCu"), ("Cs", "CsCu"),
    ]),
    ("Zr", &[
        ("H2", "ZrH2"), ("O2", "ZrO2"), ("N", "ZrN"), ("Zr", "Zr2"), ("B2", "ZrB2"),
        ("Cu", "CuZr"),
    ]),
    ("Zr2", &[("Zn", "ZnZr2"), ("Ni", "NiZr2")]),
    ("Nb", &[("H2", "NbH2"), ("N", "NbN"), ("B2", "NbB2"), ("Cu", "CuNb"), ("Nb", "Nb2")]),
    ("Nb2", &[("Zn", "ZnNb2"), ("Ni", "NiNb2")]),
    ("Mo", &[("H2", "MoH2"), ("N", "MoN"), ("B2", "MoB2"), ("Cu", "CuMo")]),
    ("Mo2", &[("Zn", "ZnMo2"), ("Ni", "NiMo2")]),
    ("Tc", &[
        ("H", "TcH2"), ("O2", "TcO2"), ("N", "TcN"), ("B", "TcB"), ("Cu", "CuTc"),
        ("Tc", "Tc2"),
    ]),
    ("Tc2", &[("Zn", "ZnTc2"), ("Ni", "NiTc2")]),
    ("Ru", &[
        ("H2", "RuH2"), ("O2", "RuO2"), ("N", "RuN"), ("B", "RuB"), ("Cu", "CuRu"),
        ("Ru", "Ru2"),
    ]),
    ("Ru2", &[("Zn", "ZnRu2"), ("Ni", "NiRu2")]),
    ("Rh", &[("H2", "RhH2"), ("N", "RhN"), ("B", "RhB"), ("Cu", "CuRh"), ("Rh", "Rh2")]),
    ("Rh2", &[("Zn", "ZnRh2"), ("Ni", "NiRh2")]),
    ("Pd", &[
        ("H2", "PdH2"), ("O", "PdO"), ("F2", "PdF2"), ("Cl2", "PdCl2"), ("Br2", "PdBr2"),
        ("I2", "PdI2"), ("N", "PdN"), ("B", "PdB"), ("Cu", "CuPd"), ("Pd", "Pd2"),
    ]),
    ("Pd2", &[("Zn", "ZnPd2"), ("Ni", "NiPd2")]),
    ("Pt", &[
        ("H2", "PtH2"), ("O2", "PtO2"), ("N", "PtN"), ("B", "PtB"), ("Cu", "CuPt"),
        ("Pt", "Pt2"),
    ]),
    ("Pt2", &[("Zn", "ZnPt2"), ("Ni", "NiPt2")]),
    ("Au", &[("N", "AuN"), ("B", "AuB"), ("Cu", "CuAu"), ("Au", "Au2")]),
    ("Au2", &[("Zn", "ZnAu2"), ("Ni", "NiAu2")]),
    ("Hg", &[
        ("H2", "HgH2"), ("O", "HgO"), ("F2", "HgF2"), ("Cl2", "HgCl2"), ("Br2", "HgBr2"),
        ("I2", "HgI2"), ("N", "HgN"), ("B2", "HgB2"), ("Al2", "HgAl2"), ("Cu", "CuHg"),
        ("Hg", "Hg2"),
    ]),
    ("Hg2", &[("Zn", "ZnHg2"), ("Ni", "NiHg2")]),
    ("Tl", &[("H", "TlH"), ("N", "TlN"), ("B", "TlB"), ("Cu", "CuTl"), ("Tl", "Tl2")]),
    ("Tl2", &[("Zn", "ZnTl2"), ("Ni", "NiTl2")]),
    ("Pb", &[
        ("H2", "PbH2"), ("O", "PbO"), ("F2", "PbF2"), ("Cl2", "PbCl2"), ("Br2", "PbBr2"),
        ("I2", "PbI2"), ("N", "PbN"), ("B2", "PbB2"), ("Cu", "CuPb"), ("Pb", "Pb2"),
    ]),
    ("Pb2", &[("Zn", "ZnPb2"), ("Ni", "NiPb2")]),
    ("Bi", &[("N", "BiN"), ("B", "BiB"), ("Cu", "CuBi"), ("Bi", "Bi2")]),
    ("Bi2", &[("Zn", "ZnBi2"), ("Ni", "NiBi2")]),
    ("Po", &[
        ("H2", "PoH2"), ("O2", "PoO2"), ("F2", "PoF2"), ("Cl2", "PoCl2"), ("Br2", "PoBr2"),
        ("I2", "PoI2"), ("N", "PoN"), ("B", "PoB"), ("Cu", "CuPo"), ("Po", "Po2"),
    ]),
    ("Po2", &[("Zn", "ZnPo2"), ("Ni", "NiPo2")]),
    ("At", &[("H", "AtH"), ("At", "At2"), ("N", "AtN"), ("B", "AtB"), ("Cu", "CuAt")]),
    ("At2", &[("O", "At2O"), ("Zn", "ZnAt2"), ("Ni", "NiAt2")]),
    ("At", &[
        ("H", "HAt"), ("Li", "LiAt"), ("Na", "NaAt"), ("K", "KAt"), ("Rb", "RbAt"),
        ("Cs", "CsAt"), ("Fr", "FrAt"), ("Mg", "MgAt2"), ("Ca", "CaAt2"), ("Sr", "SrAt2"),
        ("Ba", "BaAt2"), ("Ra", "RaAt2"), ("Tl", "TlAt"), ("Pb", "PbAt2"), ("O", "OAt2"),
        ("S", "SAt2"), ("Se", "SeAt2"), ("Te", "TeAt2"), ("F", "FAt"), ("Cl", "ClAt"),
        ("Br", "BrAt"), ("I", "IAt"), ("At", "At2"),
    ]),
    ("Rf", &[("O", "RfO2")]),
    ("Db", &[("O", "DbO2")]),
    ("Mt", &[("O", "MtO2")]),
    ("Ds", &[("O", "DsO2")]),
    ("Rg", &[("O", "RgO")]),
    ("Cn", &[("F", "CnF2"), ("Cl", "CnCl2"), ("Br", "CnBr2"), ("I", "CnI2"), ("O", "CnO")]),
    ("Nh", &[("O", "NhO")]),
    ("Fl", &[("O", "FlO2")]),
    ("Mc", &[("I", "McI3"), ("O", "McO")]),
    ("Lv", &[("F", "LvF2"), ("Cl", "LvCl2"), ("Br", "LvBr2"), ("I", "LvI2"), ("O", "LvO2")]),
    ("Og", &[("F", "OgF2"), ("Cl", "OgCl2"), ("Br", "OgBr2"), ("I", "OgI2"), ("O", "OgO2")]),
];

/// Which species table(s) the simulation spawns from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Chemical elements only.
    Element,
    /// Fundamental particles only.
    Particle,
    /// The element table twice; duplicating the element catalog (rather
    /// than concatenating both tables) is the long-standing behavior.
    Both,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ELEMENT" => Ok(Mode::Element),
            "PARTICLE" => Ok(Mode::Particle),
            "BOTH" => Ok(Mode::Both),
            other => Err(format!("unknown mode {other:?}")),
        }
    }
}

impl Mode {
    /// The spawn table for this mode.
    pub fn species(self) -> Vec<(&'static str, f32)> {
        match self {
            Mode::Element => ELEMENTS.to_vec(),
            Mode::Particle => FUNDAMENTALS.to_vec(),
            Mode::Both => {
                let mut both = ELEMENTS.to_vec();
                both.extend_from_slice(ELEMENTS);
                both
            }
        }
    }
}

/// Static, conceptually symmetric mapping from a pair of species names to a
/// reaction product.
///
/// Storage is asymmetric (nested maps keyed reactant-then-partner);
/// [`lookup`](Self::lookup) checks both orders. Read-only
/// after construction, so shared references are freely usable across threads.
#[derive(Debug, Clone)]
pub struct ReactionCatalog {
    reactions: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl ReactionCatalog {
    /// Build the standard catalog from the literal table, applying
    /// first-insert-wins at both levels (see module docs).
    pub fn standard() -> Self {
        let mut reactions: HashMap<&str, HashMap<&str, &str>> = HashMap::new();
        for (reactant, partners) in REACTION_TABLE {
            reactions.entry(reactant).or_insert_with(|| {
                let mut inner = HashMap::new();
                for (partner, product) in *partners {
                    inner.entry(*partner).or_insert(*product);
                }
                inner
            });
        }
        log::debug!(
            "reaction catalog built: {} reactants, {} pairs",
            reactions.len(),
            reactions.values().map(HashMap::len).sum::<usize>()
        );
        Self { reactions }
    }

    /// Product for the unordered pair `(a, b)`, trying `a -> b` before
    /// `b -> a`. `None` means no reaction, which is the normal case for most
    /// pairs, not an error.
    pub fn lookup(&self, a: &str, b: &str) -> Option<&'static str> {
        if let Some(product) = self.reactions.get(a).and_then(|inner| inner.get(b)) {
            return Some(product);
        }
        self.reactions.get(b).and_then(|inner| inner.get(a)).copied()
    }

    /// Iterate every stored (reactant, partner, product) triple.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str, &'static str)> + '_ {
        self.reactions.iter().flat_map(|(reactant, inner)| {
            inner.iter().map(move |(partner, product)| (*reactant, *partner, *product))
        })
    }
}

impl Default for ReactionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn species_tables_have_expected_sizes() {
        assert_eq!(ELEMENTS.len(), 118);
        assert_eq!(FUNDAMENTALS.len(), 24);
        assert_eq!(ELEMENTS[1], ("He", crate::constants::DECAY_STEP));
        assert!(FUNDAMENTALS.iter().all(|&(_, mass)| mass == 10.0));
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("element".parse::<Mode>(), Ok(Mode::Element));
        assert_eq!("PARTICLE".parse::<Mode>(), Ok(Mode::Particle));
        assert_eq!("  Both ".parse::<Mode>(), Ok(Mode::Both));
        assert!("atoms".parse::<Mode>().is_err());
    }

    #[test]
    fn both_mode_duplicates_the_element_table() {
        let species = Mode::Both.species();
        assert_eq!(species.len(), 2 * ELEMENTS.len());
        assert_eq!(&species[..ELEMENTS.len()], ELEMENTS);
        assert_eq!(&species[ELEMENTS.len()..], ELEMENTS);
    }

    #[test]
    fn lookup_checks_both_orders() {
        let catalog = ReactionCatalog::standard();
        // "H" never appears as a reactant key; only the reverse order hits.
        assert_eq!(catalog.lookup("H", "F"), Some("HF"));
        assert_eq!(catalog.lookup("F", "H"), Some("HF"));
        assert_eq!(catalog.lookup("H2", "O2"), Some("H2O"));
    }

    #[test]
    fn absent_pairs_are_no_reaction() {
        let catalog = ReactionCatalog::standard();
        assert_eq!(catalog.lookup("He", "Ne"), None);
        assert_eq!(catalog.lookup("Electron", "Photon"), None);
        assert_eq!(catalog.lookup("nonsense", "Fe"), None);
    }

    #[test]
    fn first_insert_wins_for_duplicate_partners() {
        let catalog = ReactionCatalog::standard();
        // N2's block lists O2 three times (NO, NO2, N2O); the first wins.
        assert_eq!(catalog.lookup("N2", "O2"), Some("NO"));
        // O's block lists O twice (O2, then OI2).
        assert_eq!(catalog.lookup("O", "O"), Some("O2"));
    }

    #[test]
    fn duplicate_reactant_blocks_are_discarded() {
        let catalog = ReactionCatalog::standard();
        // Sr -> Sr2 only appears in the discarded second "Sr" block.
        assert_eq!(catalog.lookup("Sr", "Sr"), None);
        // Fr -> Fr2 likewise lives in the discarded second "Fr" block.
        assert_eq!(catalog.lookup("Fr", "Fr"), None);
        // The surviving first blocks still resolve.
        assert_eq!(catalog.lookup("Sr", "H2"), Some("SrH2"));
        assert_eq!(catalog.lookup("Fr", "H"), Some("FrH"));
    }

    /// The catalog is conceptually symmetric: for pairs defined in a single
    /// direction, lookup order never matters. A fixed set of pairs is defined
    /// in both directions with different products; for those the documented
    /// precedence is forward-direction-first, and this test pins the set so
    /// any change to the literal data shows up.
    #[test]
    fn lookup_is_symmetric_outside_known_conflicts() {
        let catalog = ReactionCatalog::standard();
        let known_conflicts: BTreeSet<(&str, &str)> = [
            ("B", "P"),
            ("Br", "F"),
            ("Cl", "F"),
            ("Cl", "I"),
            ("Cl2", "S"),
            ("Cl2", "Se"),
            ("Cs", "Cu"),
            ("Cs", "K"),
            ("Cs", "Rb"),
            ("Cs2", "Zn"),
            ("Cu", "K"),
            ("Cu", "Na"),
            ("Cu", "Rb"),
            ("F", "I"),
            ("K", "Rb"),
            ("K2", "Zn"),
            ("N", "Nb"),
            ("N", "Ti"),
            ("N", "V"),
            ("N", "Zr"),
            ("Rb2", "Zn"),
        ]
        .into_iter()
        .collect();

        let mut conflicts = BTreeSet::new();
        for (a, b, product) in catalog.entries() {
            if catalog.lookup(a, b) != catalog.lookup(b, a) {
                let pair = if a < b { (a, b) } else { (b, a) };
                conflicts.insert(pair);
            } else {
                assert_eq!(catalog.lookup(a, b), Some(product));
            }
        }
        assert_eq!(conflicts, known_conflicts);
    }

    #[test]
    fn forward_direction_takes_precedence_on_conflicts() {
        let catalog = ReactionCatalog::standard();
        assert_eq!(catalog.lookup("K", "Rb"), Some("RbK"));
        assert_eq!(catalog.lookup("Rb", "K"), Some("KRb"));
    }
}
