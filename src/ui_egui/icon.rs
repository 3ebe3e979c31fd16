//! Window icon drawn at startup so no image asset has to ship with the binary.

const ICON_SIZE: u32 = 64;
const SHELL: [u8; 3] = [253, 230, 200];
const OUTLINE: [u8; 3] = [194, 120, 60];

/// An egg on a transparent background.
pub fn window_icon() -> egui::IconData {
    let size = ICON_SIZE as f32;
    let center_x = size / 2.0;
    let center_y = size * 0.55;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = (x as f32 + 0.5 - center_x) / (size * 0.34);
            // Narrower towards the top
            let ry = if (y as f32) < center_y { 0.50 } else { 0.40 };
            let dy = (y as f32 + 0.5 - center_y) / (size * ry);
            let distance = dx * dx + dy * dy;

            let pixel = if distance <= 0.80 {
                [SHELL[0], SHELL[1], SHELL[2], 255]
            } else if distance <= 1.0 {
                [OUTLINE[0], OUTLINE[1], OUTLINE[2], 255]
            } else {
                [0, 0, 0, 0]
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}
