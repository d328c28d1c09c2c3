//! RON I/O
use crate::{
    traits::{ConvertToSerializable, RONExport, RONImport},
    types::Result,
};

impl<S: ConvertToSerializable> RONExport for S {
    fn to_ron_string(&self) -> Result<String> {
        Ok(ron::to_string(&self.to_serializable())?)
    }
}

impl<S: ConvertToSerializable> RONImport for S
where
    for<'a> S::SerializableType: serde::Deserialize<'a>,
{
    fn from_ron_string(s: String) -> Result<Self> {
        Self::from_serializable(ron::from_str(&s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        geometry::GeometryMapping,
        quadrature::{self, QuadratureRule},
        traits::ReferenceMapping,
        types::{CachingPolicy, Error, EvaluationType, ReferenceCellType},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_ron_export_and_import_rule() {
        let rule = quadrature::rule(ReferenceCellType::Tetrahedron, 4).unwrap();
        rule.export_as_ron("_test_export_rule.ron").unwrap();

        let rule2 = QuadratureRule::<f64>::import_from_ron("_test_export_rule.ron").unwrap();

        assert_eq!(rule2.cell_type(), ReferenceCellType::Tetrahedron);
        assert_eq!(rule2.order(), rule.order());
        assert_eq!(rule2.npoints(), rule.npoints());
        for (a, b) in rule2.weights().iter().zip(rule.weights()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_ron_export_and_import_mapping() {
        let m = GeometryMapping::<f64, 2, 3>::from_coordinates(
            ReferenceCellType::Quadrilateral,
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.5],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            CachingPolicy::uniform(EvaluationType::PreCompute),
        );
        m.export_as_ron("_test_export_mapping.ron").unwrap();

        let m2 =
            GeometryMapping::<f64, 2, 3>::import_from_ron("_test_export_mapping.ron").unwrap();

        assert_eq!(m2.corners(), m.corners());
        assert_eq!(m2.policy(), m.policy());
        assert_eq!(m2.corner_mode(), m.corner_mode());
        assert_relative_eq!(
            m2.integration_element(&[0.3, 0.6]),
            m.integration_element(&[0.3, 0.6])
        );
    }

    #[test]
    fn test_import_invalid() {
        assert!(matches!(
            QuadratureRule::<f64>::from_ron_string(String::from(
                "(cell_type: Triangle, order: 1, points: [0.3, 0.3, 0.3], weights: [0.5])"
            )),
            Err(Error::InvalidData(_))
        ));
        assert!(matches!(
            QuadratureRule::<f64>::from_ron_string(String::from("(cell_type: Triangle")),
            Err(Error::RonDeserialize(_))
        ));
        assert!(matches!(
            QuadratureRule::<f64>::import_from_ron("_test_file_that_does_not_exist.ron"),
            Err(Error::Io(_))
        ));
    }
}
