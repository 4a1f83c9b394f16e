use crate::geometry::area::{PlaneShape, area, perimeter};
use crate::geometry::circle::{CircleInput, circle_relations};
use crate::geometry::congruence::check_congruence;
use crate::geometry::similarity::{compare_sides, homothety, scale_ratios};
use crate::geometry::solids::{Solid, surface_area, volume};
use crate::geometry::triangle::TriangleSpec;
use crate::solve_result::SolveResult;

pub fn geometry_examples(example: usize) {
    match example {
        0 => {
            let shapes = vec![
                PlaneShape::Triangle {
                    base: None,
                    height: None,
                    sides: [Some(5.0), Some(5.0), Some(6.0)],
                },
                PlaneShape::Rectangle {
                    width: Some(2.0),
                    length: Some(3.5),
                },
                PlaneShape::Circle { radius: Some(1.0) },
                PlaneShape::Trapezoid {
                    top: Some(2.0),
                    bottom: Some(4.0),
                    height: Some(3.0),
                },
                PlaneShape::RegularPolygon {
                    sides: Some(6),
                    side_length: Some(1.0),
                },
            ];
            for shape in &shapes {
                println!(
                    "{}: area {:?}, perimeter {:?}",
                    shape.name(),
                    area(shape),
                    perimeter(shape)
                );
            }
            let solids = vec![
                Solid::Cube {
                    width: Some(2.0),
                    height: Some(2.0),
                    depth: Some(2.0),
                },
                Solid::Sphere { radius: Some(1.0) },
                Solid::Pyramid {
                    width: Some(2.0),
                    depth: Some(2.0),
                    height: Some(3.0),
                },
                Solid::Cylinder {
                    radius: Some(1.0),
                    height: Some(2.0),
                },
            ];
            for solid in &solids {
                println!(
                    "{}: volume {:?}, surface {:?}",
                    solid.name(),
                    volume(solid),
                    surface_area(solid)
                );
            }
        }
        1 => {
            let input = CircleInput {
                radius: Some(5.0),
                chord: Some(8.0),
                tangent: None,
                arc_angle: Some(100.0),
                central_angle: Some(60.0),
            };
            if let SolveResult::Value(rel) = circle_relations(&input) {
                for (name, value) in rel.entries() {
                    println!("{}: {}", name, value);
                }
            }
        }
        2 => {
            // SAS compares sides 0, 1 and angle 0 of both records
            let t1 = TriangleSpec {
                sides: [Some(3.0), Some(4.0), None],
                angles: [Some(90.0), None, None],
            };
            let t2 = t1.clone();
            println!("{} vs {}: {:?}", t1, t2, check_congruence(&t1, &t2));
            println!("k = 2: {:?}", scale_ratios(Some(2.0)));
            println!(
                "3-4-5 vs 6-8-10: {:?}",
                compare_sides(
                    [Some(3.0), Some(4.0), Some(5.0)],
                    [Some(6.0), Some(8.0), Some(10.0)]
                )
            );
            println!(
                "image of (3, 4) about (1, 1), k = 2: {:?}",
                homothety(Some((1.0, 1.0)), Some((3.0, 4.0)), Some(2.0))
            );
        }
        _ => {
            println!("no such geometry example: {}", example);
        }
    }
}
