// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use vmath_core::math::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use vmath_core::math::{
    self, Mat3, Mat4, PerlinNoise, Prng, Quat, Real, SphVec, Vec2, Vec3, Vec4,
};

const ABS_TOL: Real = 1e-5;
const REL_TOL: Real = 1e-5;

fn approx_eq(a: Real, b: Real) {
    let diff = (a - b).abs();
    let allowed = ABS_TOL + REL_TOL * b.abs();
    assert!(diff <= allowed, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq3(a: Vec3, b: Vec3) {
    let (a, b) = (a.to_array(), b.to_array());
    for i in 0..3 {
        approx_eq(a[i], b[i]);
    }
}

#[test]
fn quarter_turns_about_each_axis() {
    approx_eq3(
        Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y),
        Vec3::UNIT_Z,
    );
    approx_eq3(
        Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z),
        Vec3::UNIT_X,
    );
    approx_eq3(
        Mat4::rotation_z(FRAC_PI_2).transform_direction(&Vec3::UNIT_X),
        Vec3::UNIT_Y,
    );
}

#[test]
fn quaternion_and_matrix_rotations_agree() {
    let axis = Vec3::new(1.0, 2.0, -2.0).scale(1.0 / 3.0);
    let angle = 0.7;
    let q = Quat::from_axis_angle(axis, angle);
    let m = Mat3::rotation_axis_angle(axis, angle);
    let v = Vec3::new(0.3, -1.2, 2.5);
    approx_eq3(v.rotate(&q), m.transform(&v));
    approx_eq3(v.rotate(&q), q.to_mat4().transform_point(&v));
}

#[test]
fn matrix_to_quat_round_trips_every_branch() {
    // Angles near π exercise the non-trace branches of the extraction.
    let cases = [
        (Vec3::UNIT_X, 0.4),
        (Vec3::UNIT_X, PI - 0.01),
        (Vec3::UNIT_Y, PI - 0.01),
        (Vec3::UNIT_Z, PI - 0.01),
        (Vec3::new(0.0, 0.6, 0.8), 2.0),
    ];
    for (axis, angle) in cases {
        let q = Quat::from_axis_angle(axis, angle);
        let back = q.to_mat4().to_quat();
        let same = q.dot(&back).abs();
        approx_eq(same, 1.0);
    }
}

#[test]
fn quat_rotate_appends_rotation() {
    let q = Quat::identity()
        .rotate(Vec3::UNIT_Z, FRAC_PI_4)
        .rotate(Vec3::UNIT_Z, FRAC_PI_4);
    approx_eq3(Vec3::UNIT_X.rotate(&q), Vec3::UNIT_Y);
}

#[test]
fn composed_transforms_apply_right_to_left() {
    let m = Mat4::identity().translated(1.0, 0.0, 0.0).rotated_z(FRAC_PI_2);
    // Rotate first, then translate.
    approx_eq3(m.transform_point(&Vec3::UNIT_X), Vec3::new(1.0, 1.0, 0.0));
    approx_eq3(m.get_translation(), Vec3::new(1.0, 0.0, 0.0));
    approx_eq3(
        Mat4::rotation_x(0.3).scaled(2.0, 3.0, 4.0).get_scaling(),
        Vec3::new(2.0, 3.0, 4.0),
    );
}

#[test]
fn perspective_maps_near_and_far_planes() {
    let proj = Mat4::perspective(FRAC_PI_2, 16.0 / 9.0, 0.5, 50.0);
    let near = proj.transform_vec4(&Vec4::new(0.0, 0.0, -0.5, 1.0));
    let far = proj.transform_vec4(&Vec4::new(0.0, 0.0, -50.0, 1.0));
    approx_eq(near.to_vec3_projected().z(), -1.0);
    approx_eq(far.to_vec3_projected().z(), 1.0);
    // 90° vertical field of view: the top edge at distance 1 maps to y = 1.
    let top = proj.transform_vec4(&Vec4::new(0.0, 1.0, -1.0, 1.0));
    approx_eq(top.to_vec3_projected().y(), 1.0);
}

#[test]
fn orthographic_maps_box_to_cube() {
    let proj = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.1, 10.0);
    approx_eq3(
        proj.transform_point(&Vec3::new(2.0, 1.0, -10.0)),
        Vec3::new(1.0, 1.0, 1.0),
    );
    approx_eq3(
        proj.transform_point(&Vec3::new(-2.0, -1.0, -0.1)),
        Vec3::new(-1.0, -1.0, -1.0),
    );
}

#[test]
fn mat3_inverse_and_determinant() {
    let m = Mat3::rotation_y(0.4).multiply(&Mat3::scaling(2.0, 1.0, 0.5));
    approx_eq(m.determinant(), 1.0);
    let inv = m.inverse().expect("invertible");
    let id = m.multiply(&inv).to_array();
    for (i, v) in id.iter().enumerate() {
        approx_eq(*v, if i % 4 == 0 { 1.0 } else { 0.0 });
    }
    assert!(Mat3::scaling(1.0, 0.0, 1.0).inverse().is_err());
}

#[test]
fn tiny_uniform_scales_invert() {
    let m = Mat3::scaling(0.001, 0.001, 0.001);
    approx_eq(m.determinant(), 0.0);
    let inv = m.inverse().expect("uniform scale is well-conditioned");
    approx_eq3(inv.transform(&Vec3::new(0.001, -0.002, 0.003)), Vec3::new(1.0, -2.0, 3.0));

    let m4 = Mat4::translation(1.0, 2.0, 3.0).multiply(&Mat4::scaling(0.002, 0.002, 0.002));
    let inv4 = m4.inverse().expect("scaled affine is well-conditioned");
    let p = Vec3::new(0.5, -0.25, 4.0);
    approx_eq3(inv4.transform_point(&m4.transform_point(&p)), p);
}

#[test]
fn dump_writes_one_line_per_row() {
    let mut out = Vec::new();
    Mat3::identity().dump(&mut out).expect("write to vec");
    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("[      1.00000      0.00000      0.00000 ]"));

    let mut out = Vec::new();
    Quat::from_axis_angle(Vec3::UNIT_Z, 2.0 * PI / 3.0)
        .dump(&mut out)
        .expect("write to vec");
    assert_eq!(String::from_utf8(out).expect("utf8"), "([ 0.0000 0.0000 0.8660 ] 0.5000)");
}

#[test]
fn vec2_rotation_and_homogeneous_transform() {
    let v = Vec2::new(1.0, 0.0).rotate(FRAC_PI_2);
    approx_eq(v.x(), 0.0);
    approx_eq(v.y(), 1.0);
    let moved = Vec2::new(1.0, 1.0).transform(&Mat3::translation_2d(2.0, -1.0));
    assert_eq!(moved, Vec2::new(3.0, 0.0));
}

#[test]
fn spherical_coordinates_follow_y_up_convention() {
    approx_eq3(SphVec::new(0.0, FRAC_PI_2, 2.0).to_vec3(), Vec3::new(2.0, 0.0, 0.0));
    approx_eq3(SphVec::new(FRAC_PI_2, FRAC_PI_2, 1.0).to_vec3(), Vec3::UNIT_Z);
    approx_eq3(SphVec::default().to_vec3(), Vec3::UNIT_Y);
}

#[test]
fn scalar_helpers() {
    approx_eq(math::deg_to_rad(180.0), PI);
    approx_eq(math::rad_to_deg(FRAC_PI_2), 90.0);
    assert_eq!(math::clamp(5.0, -1.0, 1.0), 1.0);
    approx_eq(math::lerp(2.0, 4.0, 0.25), 2.5);
    approx_eq(math::gaussian(0.0, 0.0, 1.0), 0.398_942_3);
    approx_eq(math::integral(|x| 2.0 * x, 0.0, 1.0, 1_000), 1.0 - 1e-3);
}

#[test]
fn curves_hit_their_anchor_points() {
    approx_eq(math::bezier(1.0, 9.0, -4.0, 3.0, 0.0), 1.0);
    approx_eq(math::bezier(1.0, 9.0, -4.0, 3.0, 1.0), 3.0);
    approx_eq(math::spline(0.0, 1.0, 2.0, 3.0, 0.5), 1.5);
    // B-spline of a line through the controls is that line.
    approx_eq(math::bspline(0.0, 1.0, 2.0, 3.0, 0.0), 1.0);
    approx_eq(math::bspline(0.0, 1.0, 2.0, 3.0, 1.0), 2.0);
}

#[test]
fn noise_is_seeded_and_bounded() {
    let a = PerlinNoise::new(77);
    let b = PerlinNoise::new(77);
    let mut prng = Prng::from_seed_u64(5);
    for _ in 0..200 {
        let (x, y, z) = (prng.frand(16.0), prng.frand(16.0), prng.frand(16.0));
        let n = a.noise3(x, y, z);
        assert_eq!(n, b.noise3(x, y, z));
        assert!(n.abs() <= 1.5, "noise3 out of range: {n}");
        assert!(a.noise1(x).abs() <= 1.5);
        assert!(a.turbulence2(x, y, 4) >= 0.0);
    }
    assert_eq!(math::noise2(0.5, 0.5), math::noise2(0.5, 0.5));
}
