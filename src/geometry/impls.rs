#[cfg(feature = "glam")]
mod glam_impls {
    use crate::geometry::Vector3;

    macro_rules! impl_glam {
        ($vector: ty, $scalar: ty) => {
            impl From<$vector> for Vector3<$scalar> {
                #[inline]
                fn from(v: $vector) -> Self {
                    Self::new(v.x, v.y, v.z)
                }
            }

            impl From<Vector3<$scalar>> for $vector {
                #[inline]
                fn from(v: Vector3<$scalar>) -> Self {
                    <$vector>::new(v.x, v.y, v.z)
                }
            }
        };
    }

    impl_glam!(glam::Vec3, f32);
    impl_glam!(glam::Vec3A, f32);
    impl_glam!(glam::DVec3, f64);

    #[cfg(test)]
    mod tests {
        use crate::geometry::{BoundingBox, Ray, Vector3};

        #[test]
        fn round_trip_through_glam() {
            let v = glam::DVec3::new(1.0, -2.0, 3.5);
            assert_eq!(glam::DVec3::from(Vector3::from(v)), v);

            let shape = BoundingBox::new(glam::Vec3::ZERO.into(), glam::Vec3::ONE.into());
            let ray = Ray::new(glam::Vec3::new(0.5, 0.5, -1.0).into(), glam::Vec3::Z.into());
            let reflection = shape.intersect(&ray).unwrap();

            assert_eq!(glam::Vec3::from(reflection.ray.direction), glam::Vec3::NEG_Z);
        }
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impls {
    use crate::geometry::{Scalar, Vector3};

    impl<T> From<nalgebra::Vector3<T>> for Vector3<T>
    where
        T: Scalar + nalgebra::Scalar,
    {
        #[inline]
        fn from(v: nalgebra::Vector3<T>) -> Self {
            Self::new(v.x, v.y, v.z)
        }
    }

    impl<T> From<Vector3<T>> for nalgebra::Vector3<T>
    where
        T: Scalar + nalgebra::Scalar,
    {
        #[inline]
        fn from(v: Vector3<T>) -> Self {
            nalgebra::Vector3::new(v.x, v.y, v.z)
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::geometry::Vector3;

        #[test]
        fn round_trip_through_nalgebra() {
            let v = nalgebra::Vector3::new(1.0f32, -2.0, 3.5);
            let converted = Vector3::from(v);

            assert_eq!(converted, Vector3::new(1.0, -2.0, 3.5));
            assert_eq!(nalgebra::Vector3::from(converted), v);
        }
    }
}
