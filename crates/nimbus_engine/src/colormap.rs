use crate::types::{GenerationError, Rgba};

/// The curated palette list offered by the colormap control.
///
/// Continuous maps are sampled by linear interpolation between anchor
/// colors; qualitative maps (Pastel*, Paired, Accent, Dark2, Set*, tab*)
/// are sampled by discrete index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Greys,
    Purples,
    Blues,
    Greens,
    Oranges,
    Reds,
    YlOrBr,
    YlOrRd,
    OrRd,
    PuRd,
    RdPu,
    BuPu,
    GnBu,
    PuBu,
    YlGnBu,
    PuBuGn,
    BuGn,
    YlGn,
    Pastel1,
    Pastel2,
    Paired,
    Accent,
    Dark2,
    Set1,
    Set2,
    Set3,
    Tab10,
    Tab20,
    Tab20b,
    Tab20c,
    Ocean,
    GistEarth,
}

enum Palette {
    Gradient(&'static [(u8, u8, u8)]),
    Discrete(&'static [(u8, u8, u8)]),
}

impl Colormap {
    /// Every offered colormap, in presentation order.
    pub const ALL: [Colormap; 37] = [
        Colormap::Viridis,
        Colormap::Plasma,
        Colormap::Inferno,
        Colormap::Magma,
        Colormap::Cividis,
        Colormap::Greys,
        Colormap::Purples,
        Colormap::Blues,
        Colormap::Greens,
        Colormap::Oranges,
        Colormap::Reds,
        Colormap::YlOrBr,
        Colormap::YlOrRd,
        Colormap::OrRd,
        Colormap::PuRd,
        Colormap::RdPu,
        Colormap::BuPu,
        Colormap::GnBu,
        Colormap::PuBu,
        Colormap::YlGnBu,
        Colormap::PuBuGn,
        Colormap::BuGn,
        Colormap::YlGn,
        Colormap::Pastel1,
        Colormap::Pastel2,
        Colormap::Paired,
        Colormap::Accent,
        Colormap::Dark2,
        Colormap::Set1,
        Colormap::Set2,
        Colormap::Set3,
        Colormap::Tab10,
        Colormap::Tab20,
        Colormap::Tab20b,
        Colormap::Tab20c,
        Colormap::Ocean,
        Colormap::GistEarth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Magma => "magma",
            Colormap::Cividis => "cividis",
            Colormap::Greys => "Greys",
            Colormap::Purples => "Purples",
            Colormap::Blues => "Blues",
            Colormap::Greens => "Greens",
            Colormap::Oranges => "Oranges",
            Colormap::Reds => "Reds",
            Colormap::YlOrBr => "YlOrBr",
            Colormap::YlOrRd => "YlOrRd",
            Colormap::OrRd => "OrRd",
            Colormap::PuRd => "PuRd",
            Colormap::RdPu => "RdPu",
            Colormap::BuPu => "BuPu",
            Colormap::GnBu => "GnBu",
            Colormap::PuBu => "PuBu",
            Colormap::YlGnBu => "YlGnBu",
            Colormap::PuBuGn => "PuBuGn",
            Colormap::BuGn => "BuGn",
            Colormap::YlGn => "YlGn",
            Colormap::Pastel1 => "Pastel1",
            Colormap::Pastel2 => "Pastel2",
            Colormap::Paired => "Paired",
            Colormap::Accent => "Accent",
            Colormap::Dark2 => "Dark2",
            Colormap::Set1 => "Set1",
            Colormap::Set2 => "Set2",
            Colormap::Set3 => "Set3",
            Colormap::Tab10 => "tab10",
            Colormap::Tab20 => "tab20",
            Colormap::Tab20b => "tab20b",
            Colormap::Tab20c => "tab20c",
            Colormap::Ocean => "ocean",
            Colormap::GistEarth => "gist_earth",
        }
    }

    /// Looks up a colormap by its exact presented name.
    pub fn from_name(name: &str) -> Result<Colormap, GenerationError> {
        Colormap::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| GenerationError::UnknownColormap(name.to_string()))
    }

    /// Samples the map at `t` in [0, 1]; out-of-range values are clamped.
    pub fn sample(self, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        match self.palette() {
            Palette::Discrete(colors) => {
                let index = ((t * colors.len() as f32) as usize).min(colors.len() - 1);
                let (r, g, b) = colors[index];
                Rgba::rgb(r, g, b)
            }
            Palette::Gradient(stops) => {
                let span = (stops.len() - 1) as f32;
                let position = t * span;
                let low = (position.floor() as usize).min(stops.len() - 2);
                let frac = position - low as f32;
                let (r0, g0, b0) = stops[low];
                let (r1, g1, b1) = stops[low + 1];
                Rgba::rgb(
                    lerp(r0, r1, frac),
                    lerp(g0, g1, frac),
                    lerp(b0, b1, frac),
                )
            }
        }
    }

    fn palette(self) -> Palette {
        use Palette::{Discrete, Gradient};
        match self {
            Colormap::Viridis => Gradient(&[
                (68, 1, 84),
                (59, 82, 139),
                (33, 145, 140),
                (94, 201, 98),
                (253, 231, 37),
            ]),
            Colormap::Plasma => Gradient(&[
                (13, 8, 135),
                (126, 3, 168),
                (204, 71, 120),
                (248, 149, 64),
                (240, 249, 33),
            ]),
            Colormap::Inferno => Gradient(&[
                (0, 0, 4),
                (87, 16, 110),
                (188, 55, 84),
                (249, 142, 9),
                (252, 255, 164),
            ]),
            Colormap::Magma => Gradient(&[
                (0, 0, 4),
                (81, 18, 124),
                (183, 55, 121),
                (254, 135, 97),
                (252, 253, 191),
            ]),
            Colormap::Cividis => Gradient(&[
                (0, 32, 76),
                (87, 92, 109),
                (170, 156, 115),
                (255, 234, 70),
            ]),
            Colormap::Greys => Gradient(&[(247, 247, 247), (150, 150, 150), (37, 37, 37)]),
            Colormap::Purples => Gradient(&[(252, 251, 253), (158, 154, 200), (63, 0, 125)]),
            Colormap::Blues => Gradient(&[(247, 251, 255), (107, 174, 214), (8, 48, 107)]),
            Colormap::Greens => Gradient(&[(247, 252, 245), (116, 196, 118), (0, 68, 27)]),
            Colormap::Oranges => Gradient(&[(255, 245, 235), (253, 141, 60), (127, 39, 4)]),
            Colormap::Reds => Gradient(&[(255, 245, 240), (251, 106, 74), (103, 0, 13)]),
            Colormap::YlOrBr => Gradient(&[(255, 255, 229), (254, 153, 41), (102, 37, 6)]),
            Colormap::YlOrRd => Gradient(&[(255, 255, 204), (253, 141, 60), (128, 0, 38)]),
            Colormap::OrRd => Gradient(&[(255, 247, 236), (239, 101, 72), (127, 0, 0)]),
            Colormap::PuRd => Gradient(&[(247, 244, 249), (223, 101, 176), (103, 0, 31)]),
            Colormap::RdPu => Gradient(&[(255, 247, 243), (247, 104, 161), (73, 0, 106)]),
            Colormap::BuPu => Gradient(&[(247, 252, 253), (140, 150, 198), (77, 0, 75)]),
            Colormap::GnBu => Gradient(&[(247, 252, 240), (123, 204, 196), (8, 64, 129)]),
            Colormap::PuBu => Gradient(&[(255, 247, 251), (116, 169, 207), (2, 56, 88)]),
            Colormap::YlGnBu => Gradient(&[(255, 255, 217), (65, 182, 196), (8, 29, 88)]),
            Colormap::PuBuGn => Gradient(&[(255, 247, 251), (103, 169, 207), (1, 70, 54)]),
            Colormap::BuGn => Gradient(&[(247, 252, 253), (102, 194, 164), (0, 68, 27)]),
            Colormap::YlGn => Gradient(&[(255, 255, 229), (120, 198, 121), (0, 69, 41)]),
            Colormap::Pastel1 => Discrete(&[
                (251, 180, 174),
                (179, 205, 227),
                (204, 235, 197),
                (222, 203, 228),
                (254, 217, 166),
                (255, 255, 204),
                (229, 216, 189),
                (253, 218, 236),
                (242, 242, 242),
            ]),
            Colormap::Pastel2 => Discrete(&[
                (179, 226, 205),
                (253, 205, 172),
                (203, 213, 232),
                (244, 202, 228),
                (230, 245, 201),
                (255, 242, 174),
                (241, 226, 204),
                (204, 204, 204),
            ]),
            Colormap::Paired => Discrete(&[
                (166, 206, 227),
                (31, 120, 180),
                (178, 223, 138),
                (51, 160, 44),
                (251, 154, 153),
                (227, 26, 28),
                (253, 191, 111),
                (255, 127, 0),
                (202, 178, 214),
                (106, 61, 154),
                (255, 255, 153),
                (177, 89, 40),
            ]),
            Colormap::Accent => Discrete(&[
                (127, 201, 127),
                (190, 174, 212),
                (253, 192, 134),
                (255, 255, 153),
                (56, 108, 176),
                (240, 2, 127),
                (191, 91, 23),
                (102, 102, 102),
            ]),
            Colormap::Dark2 => Discrete(&[
                (27, 158, 119),
                (217, 95, 2),
                (117, 112, 179),
                (231, 41, 138),
                (102, 166, 30),
                (230, 171, 2),
                (166, 118, 29),
                (102, 102, 102),
            ]),
            Colormap::Set1 => Discrete(&[
                (228, 26, 28),
                (55, 126, 184),
                (77, 175, 74),
                (152, 78, 163),
                (255, 127, 0),
                (255, 255, 51),
                (166, 86, 40),
                (247, 129, 191),
                (153, 153, 153),
            ]),
            Colormap::Set2 => Discrete(&[
                (102, 194, 165),
                (252, 141, 98),
                (141, 160, 203),
                (231, 138, 195),
                (166, 216, 84),
                (255, 217, 47),
                (229, 196, 148),
                (179, 179, 179),
            ]),
            Colormap::Set3 => Discrete(&[
                (141, 211, 199),
                (255, 255, 179),
                (190, 186, 218),
                (251, 128, 114),
                (128, 177, 211),
                (253, 180, 98),
                (179, 222, 105),
                (252, 205, 229),
                (217, 217, 217),
                (188, 128, 189),
                (204, 235, 197),
                (255, 237, 111),
            ]),
            Colormap::Tab10 => Discrete(&[
                (31, 119, 180),
                (255, 127, 14),
                (44, 160, 44),
                (214, 39, 40),
                (148, 103, 189),
                (140, 86, 75),
                (227, 119, 194),
                (127, 127, 127),
                (188, 189, 34),
                (23, 190, 207),
            ]),
            Colormap::Tab20 => Discrete(&[
                (31, 119, 180),
                (174, 199, 232),
                (255, 127, 14),
                (255, 187, 120),
                (44, 160, 44),
                (152, 223, 138),
                (214, 39, 40),
                (255, 152, 150),
                (148, 103, 189),
                (197, 176, 213),
                (140, 86, 75),
                (196, 156, 148),
                (227, 119, 194),
                (247, 182, 210),
                (127, 127, 127),
                (199, 199, 199),
                (188, 189, 34),
                (219, 219, 141),
                (23, 190, 207),
                (158, 218, 229),
            ]),
            Colormap::Tab20b => Discrete(&[
                (57, 59, 121),
                (82, 84, 163),
                (107, 110, 207),
                (156, 158, 222),
                (99, 121, 57),
                (140, 162, 82),
                (181, 207, 107),
                (206, 219, 156),
                (140, 109, 49),
                (189, 158, 57),
                (231, 186, 82),
                (231, 203, 148),
                (132, 60, 57),
                (173, 73, 74),
                (214, 97, 107),
                (231, 150, 156),
                (123, 65, 115),
                (165, 81, 148),
                (206, 109, 189),
                (222, 158, 214),
            ]),
            Colormap::Tab20c => Discrete(&[
                (49, 130, 189),
                (107, 174, 214),
                (158, 202, 225),
                (198, 219, 239),
                (230, 85, 13),
                (253, 141, 60),
                (253, 174, 107),
                (253, 208, 162),
                (49, 163, 84),
                (116, 196, 118),
                (161, 217, 155),
                (199, 233, 192),
                (117, 107, 177),
                (158, 154, 200),
                (188, 189, 220),
                (218, 218, 235),
                (99, 99, 99),
                (150, 150, 150),
                (189, 189, 189),
                (217, 217, 217),
            ]),
            Colormap::Ocean => Gradient(&[
                (0, 127, 0),
                (0, 64, 42),
                (0, 0, 85),
                (0, 85, 170),
                (255, 255, 255),
            ]),
            Colormap::GistEarth => Gradient(&[
                (0, 0, 0),
                (28, 78, 112),
                (66, 135, 117),
                (139, 183, 101),
                (210, 206, 139),
                (253, 250, 250),
            ]),
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::Colormap;
    use crate::types::Rgba;

    #[test]
    fn curated_list_has_expected_size_and_default() {
        assert_eq!(Colormap::ALL.len(), 37);
        assert_eq!(Colormap::default(), Colormap::Viridis);
        assert_eq!(Colormap::default().name(), "viridis");
    }

    #[test]
    fn names_round_trip() {
        for map in Colormap::ALL {
            assert_eq!(Colormap::from_name(map.name()).unwrap(), map);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(Colormap::from_name("jet").is_err());
        assert!(Colormap::from_name("VIRIDIS").is_err());
    }

    #[test]
    fn gradient_endpoints_match_anchors() {
        assert_eq!(Colormap::Viridis.sample(0.0), Rgba::rgb(68, 1, 84));
        assert_eq!(Colormap::Viridis.sample(1.0), Rgba::rgb(253, 231, 37));
    }

    #[test]
    fn discrete_sampling_picks_member_colors() {
        let first = Colormap::Set1.sample(0.0);
        assert_eq!(first, Rgba::rgb(228, 26, 28));
        let last = Colormap::Set1.sample(1.0);
        assert_eq!(last, Rgba::rgb(153, 153, 153));
    }

    #[test]
    fn out_of_range_samples_clamp() {
        assert_eq!(Colormap::Blues.sample(-1.0), Colormap::Blues.sample(0.0));
        assert_eq!(Colormap::Blues.sample(2.0), Colormap::Blues.sample(1.0));
    }
}
