//! The experiment label drawn above the frame after every plot.

use crate::pad::Pad;
use crate::primitives::{FontStyle, FontWeight, TextAnchor, TextStyle};

/// Draw the experiment label: luminosity text right-aligned at the top
/// right (empty by default), the experiment name in bold, and the
/// qualifier in italic, all positioned from the pad margins with fixed
/// relative offsets. Text styles are local, so nothing leaks into text
/// drawn later.
pub fn experiment_label(pad: &mut Pad) {
    let (l, r, t, _b) = pad.margins();
    let width = pad.width();
    let height = pad.height();
    let exp = pad.config().experiment.clone();

    // Shared baseline just above the frame.
    let lumi_offset = 0.2;
    let y = (1.0 - (1.0 - t + lumi_offset * t)) * height;

    let lumi_size = 0.6 * t * height;
    let name_size = 0.75 * t * height;
    let qualifier_size = 0.76 * name_size;
    let rel_pos_x = 0.105;
    let name_x = (0.62 - rel_pos_x * (1.0 - l - r)) * width;
    let qualifier_x = 0.62 * width;

    if !exp.lumi_text.is_empty() {
        let style = TextStyle { size: lumi_size, anchor: TextAnchor::End, ..Default::default() };
        pad.canvas_mut().text((1.0 - r) * width, y, &exp.lumi_text, &style);
    }

    if !exp.name.is_empty() {
        let style = TextStyle {
            size: name_size,
            weight: FontWeight::Bold,
            anchor: TextAnchor::Start,
            ..Default::default()
        };
        pad.canvas_mut().text(name_x, y, &exp.name, &style);
    }

    if !exp.qualifier.is_empty() {
        let style = TextStyle {
            size: qualifier_size,
            style: FontStyle::Italic,
            anchor: TextAnchor::Start,
            ..Default::default()
        };
        pad.canvas_mut().text(qualifier_x, y, &exp.qualifier, &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;

    #[test]
    fn label_draws_name_and_qualifier() {
        let mut pad = Pad::with_defaults();
        experiment_label(&mut pad);
        let svg = pad.to_svg();
        assert!(svg.contains(">CMS<"));
        assert!(svg.contains("Preliminary Phase II Simulation"));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("font-style=\"italic\""));
    }

    #[test]
    fn empty_lumi_text_omitted() {
        let mut pad = Pad::with_defaults();
        experiment_label(&mut pad);
        let svg = pad.to_svg();
        // only two text runs: name + qualifier
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn lumi_text_drawn_when_configured() {
        let mut config = PlotConfig::default();
        config.experiment.lumi_text = "14 TeV, 200 PU".into();
        let mut pad = Pad::new(config);
        experiment_label(&mut pad);
        assert!(pad.to_svg().contains("14 TeV, 200 PU"));
    }
}
