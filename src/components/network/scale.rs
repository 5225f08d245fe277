//! Named colorscales for aggregation coloring.
//!
//! Each scale is a piecewise-linear ramp over RGB stops; node colors are
//! sampled from the document's active scheme by group fraction.

/// A single ramp stop: position in `[0, 1]` and an RGB triple.
pub type Stop = (f64, [u8; 3]);

const GREYS: &[Stop] = &[(0.0, [0, 0, 0]), (1.0, [255, 255, 255])];

const YL_GN_BU: &[Stop] = &[
	(0.0, [8, 29, 88]),
	(0.125, [37, 52, 148]),
	(0.25, [34, 94, 168]),
	(0.375, [29, 145, 192]),
	(0.5, [65, 182, 196]),
	(0.625, [127, 205, 187]),
	(0.75, [199, 233, 180]),
	(0.875, [237, 248, 217]),
	(1.0, [255, 255, 217]),
];

const GREENS: &[Stop] = &[
	(0.0, [0, 68, 27]),
	(0.125, [0, 109, 44]),
	(0.25, [35, 139, 69]),
	(0.375, [65, 171, 93]),
	(0.5, [116, 196, 118]),
	(0.625, [161, 217, 155]),
	(0.75, [199, 233, 192]),
	(0.875, [229, 245, 224]),
	(1.0, [247, 252, 245]),
];

const YL_OR_RD: &[Stop] = &[
	(0.0, [128, 0, 38]),
	(0.125, [189, 0, 38]),
	(0.25, [227, 26, 28]),
	(0.375, [252, 78, 42]),
	(0.5, [253, 141, 60]),
	(0.625, [254, 178, 76]),
	(0.75, [254, 217, 118]),
	(0.875, [255, 237, 160]),
	(1.0, [255, 255, 204]),
];

const BLUERED: &[Stop] = &[(0.0, [0, 0, 255]), (1.0, [255, 0, 0])];

const RD_BU: &[Stop] = &[
	(0.0, [5, 10, 172]),
	(0.35, [106, 137, 247]),
	(0.5, [190, 190, 190]),
	(0.6, [220, 170, 132]),
	(0.7, [230, 145, 90]),
	(1.0, [178, 10, 28]),
];

const REDS: &[Stop] = &[
	(0.0, [220, 220, 220]),
	(0.2, [245, 195, 157]),
	(0.4, [245, 160, 105]),
	(1.0, [178, 10, 28]),
];

const BLUES: &[Stop] = &[
	(0.0, [5, 10, 172]),
	(0.35, [40, 60, 190]),
	(0.5, [70, 100, 245]),
	(0.6, [90, 120, 245]),
	(0.7, [106, 137, 247]),
	(1.0, [220, 220, 220]),
];

const PICNIC: &[Stop] = &[
	(0.0, [0, 0, 255]),
	(0.1, [51, 153, 255]),
	(0.2, [102, 204, 255]),
	(0.3, [153, 204, 255]),
	(0.4, [204, 204, 255]),
	(0.5, [255, 255, 255]),
	(0.6, [255, 204, 255]),
	(0.7, [255, 153, 255]),
	(0.8, [255, 102, 204]),
	(0.9, [255, 102, 102]),
	(1.0, [255, 0, 0]),
];

const RAINBOW: &[Stop] = &[
	(0.0, [150, 0, 90]),
	(0.125, [0, 0, 200]),
	(0.25, [0, 25, 255]),
	(0.375, [0, 152, 255]),
	(0.5, [44, 255, 150]),
	(0.625, [151, 255, 0]),
	(0.75, [255, 234, 0]),
	(0.875, [255, 111, 0]),
	(1.0, [255, 0, 0]),
];

const PORTLAND: &[Stop] = &[
	(0.0, [12, 51, 131]),
	(0.25, [10, 136, 186]),
	(0.5, [242, 211, 56]),
	(0.75, [242, 143, 56]),
	(1.0, [217, 30, 30]),
];

const JET: &[Stop] = &[
	(0.0, [0, 0, 131]),
	(0.125, [0, 60, 170]),
	(0.375, [5, 255, 255]),
	(0.625, [255, 255, 0]),
	(0.875, [250, 0, 0]),
	(1.0, [128, 0, 0]),
];

const HOT: &[Stop] = &[
	(0.0, [0, 0, 0]),
	(0.3, [230, 0, 0]),
	(0.6, [255, 210, 0]),
	(1.0, [255, 255, 255]),
];

const BLACKBODY: &[Stop] = &[
	(0.0, [0, 0, 0]),
	(0.2, [230, 0, 0]),
	(0.4, [230, 210, 0]),
	(0.7, [255, 255, 255]),
	(1.0, [160, 200, 255]),
];

const EARTH: &[Stop] = &[
	(0.0, [0, 0, 130]),
	(0.1, [0, 180, 180]),
	(0.2, [40, 210, 40]),
	(0.4, [230, 230, 50]),
	(0.6, [120, 70, 20]),
	(1.0, [255, 255, 255]),
];

const ELECTRIC: &[Stop] = &[
	(0.0, [0, 0, 0]),
	(0.15, [30, 0, 100]),
	(0.4, [120, 0, 100]),
	(0.6, [160, 90, 0]),
	(0.8, [230, 200, 0]),
	(1.0, [255, 250, 220]),
];

const VIRIDIS: &[Stop] = &[
	(0.0, [68, 1, 84]),
	(0.13, [72, 40, 120]),
	(0.25, [62, 73, 137]),
	(0.38, [49, 104, 142]),
	(0.5, [38, 130, 142]),
	(0.63, [31, 158, 137]),
	(0.75, [53, 183, 121]),
	(0.88, [110, 206, 88]),
	(1.0, [253, 231, 37]),
];

const S2_NEON: &[Stop] = &[
	(0.0, [57, 255, 20]),
	(0.25, [0, 255, 255]),
	(0.5, [255, 0, 255]),
	(0.75, [255, 255, 0]),
	(1.0, [255, 64, 129]),
];

/// Every selectable colorscale name, in dropdown order.
pub const NAMES: [&str; 18] = [
	"Greys",
	"YlGnBu",
	"Greens",
	"YlOrRd",
	"Bluered",
	"RdBu",
	"Reds",
	"Blues",
	"Picnic",
	"Rainbow",
	"Portland",
	"Jet",
	"Hot",
	"Blackbody",
	"Earth",
	"Electric",
	"Viridis",
	"S2 Neon",
];

/// Look up a colorscale by its display name.
pub fn by_name(name: &str) -> Option<&'static [Stop]> {
	match name {
		"Greys" => Some(GREYS),
		"YlGnBu" => Some(YL_GN_BU),
		"Greens" => Some(GREENS),
		"YlOrRd" => Some(YL_OR_RD),
		"Bluered" => Some(BLUERED),
		"RdBu" => Some(RD_BU),
		"Reds" => Some(REDS),
		"Blues" => Some(BLUES),
		"Picnic" => Some(PICNIC),
		"Rainbow" => Some(RAINBOW),
		"Portland" => Some(PORTLAND),
		"Jet" => Some(JET),
		"Hot" => Some(HOT),
		"Blackbody" => Some(BLACKBODY),
		"Earth" => Some(EARTH),
		"Electric" => Some(ELECTRIC),
		"Viridis" => Some(VIRIDIS),
		"S2 Neon" => Some(S2_NEON),
		_ => None,
	}
}

/// Sample a scale at `t` (clamped to `[0, 1]`), interpolating linearly
/// between the surrounding stops. Returns a css `rgb(...)` string; an empty
/// stop list yields black.
pub fn sample(stops: &[Stop], t: f64) -> String {
	if stops.is_empty() {
		return "rgb(0, 0, 0)".to_owned();
	}
	let t = t.clamp(0.0, 1.0);
	let (mut lo, mut hi) = (stops[0], stops[stops.len() - 1]);
	for pair in stops.windows(2) {
		if pair[0].0 <= t && t <= pair[1].0 {
			(lo, hi) = (pair[0], pair[1]);
			break;
		}
	}
	let span = hi.0 - lo.0;
	let f = if span <= f64::EPSILON {
		0.0
	} else {
		(t - lo.0) / span
	};
	let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
	format!(
		"rgb({}, {}, {})",
		mix(lo.1[0], hi.1[0]),
		mix(lo.1[1], hi.1[1]),
		mix(lo.1[2], hi.1[2])
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_listed_name_resolves() {
		assert_eq!(NAMES.len(), 18);
		for name in NAMES {
			assert!(by_name(name).is_some(), "missing scale {name}");
		}
	}

	#[test]
	fn unknown_name_is_none() {
		assert!(by_name("Plasma").is_none());
		assert!(by_name("").is_none());
	}

	#[test]
	fn sample_hits_endpoints_exactly() {
		let portland = by_name("Portland").unwrap();
		assert_eq!(sample(portland, 0.0), "rgb(12, 51, 131)");
		assert_eq!(sample(portland, 1.0), "rgb(217, 30, 30)");
	}

	#[test]
	fn sample_interpolates_between_stops() {
		assert_eq!(sample(GREYS, 0.5), "rgb(128, 128, 128)");
		// Out-of-range input clamps rather than extrapolating.
		assert_eq!(sample(GREYS, -1.0), "rgb(0, 0, 0)");
		assert_eq!(sample(GREYS, 2.0), "rgb(255, 255, 255)");
	}

	#[test]
	fn sample_of_an_empty_scale_is_black() {
		assert_eq!(sample(&[], 0.5), "rgb(0, 0, 0)");
	}
}
