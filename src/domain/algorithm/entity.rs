//! Algorithm entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::validation::{
    optional_string, optional_string_list, require_object_list, require_string,
    require_string_list, require_u32, ValidationError,
};

/// A single inference parameter entry. The schema of each entry is
/// deployment-specific and deliberately unconstrained.
pub type InferenceParameters = Map<String, Value>;

/// A deployable ML algorithm's configuration: deployment region, allowed
/// instance types, resource limits, and inference parameters.
///
/// Constructed once, read thereafter. Fields are private with no mutators;
/// the record is used as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Algorithm {
    /// Identifier for the algorithm
    name: String,

    /// Deployment region identifier
    region_name: String,

    /// Resource identifier; absent until assigned externally
    #[serde(skip_serializing_if = "Option::is_none")]
    arn: Option<String>,

    /// Owning account identifier; absent until assigned externally
    #[serde(skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,

    /// Allowed instance types for training jobs
    training_instance_type: Vec<String>,

    /// Names of required training data artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    training_data_required: Option<Vec<String>>,

    /// Allowed instance types for inference endpoints
    inference_instance_type: Vec<String>,

    /// Upper bound on training job duration, in hours
    training_max_run_hours: u32,

    /// Storage volume size for training, in gigabytes
    training_volume_size_gb: u32,

    /// Per-deployment inference configuration entries
    inference_parameters: Vec<InferenceParameters>,
}

impl Algorithm {
    /// Create a new Algorithm from its required fields. Optional fields
    /// start absent; set them with the builder-style methods.
    pub fn new(
        name: impl Into<String>,
        region_name: impl Into<String>,
        training_instance_type: Vec<String>,
        inference_instance_type: Vec<String>,
        training_max_run_hours: u32,
        training_volume_size_gb: u32,
        inference_parameters: Vec<InferenceParameters>,
    ) -> Self {
        Self {
            name: name.into(),
            region_name: region_name.into(),
            arn: None,
            account_id: None,
            training_instance_type,
            training_data_required: None,
            inference_instance_type,
            training_max_run_hours,
            training_volume_size_gb,
            inference_parameters,
        }
    }

    /// Construct an Algorithm from an untyped JSON mapping, such as a parsed
    /// definition file entry or an API payload.
    ///
    /// All-or-nothing: every required field must be present and convertible
    /// to its declared type, or construction fails with a
    /// [`ValidationError`]. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = value
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch("algorithm", "object", value))?;
        Self::from_fields(fields)
    }

    /// Construct an Algorithm from a field mapping. See [`Self::from_value`].
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_string(fields, "name")?,
            region_name: require_string(fields, "region_name")?,
            arn: optional_string(fields, "arn")?,
            account_id: optional_string(fields, "account_id")?,
            training_instance_type: require_string_list(fields, "training_instance_type")?,
            training_data_required: optional_string_list(fields, "training_data_required")?,
            inference_instance_type: require_string_list(fields, "inference_instance_type")?,
            training_max_run_hours: require_u32(fields, "training_max_run_hours")?,
            training_volume_size_gb: require_u32(fields, "training_volume_size_gb")?,
            inference_parameters: require_object_list(fields, "inference_parameters")?,
        })
    }

    /// Builder-style method to set the resource identifier
    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Builder-style method to set the owning account identifier
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Builder-style method to set the required training data artifacts
    pub fn with_training_data_required(mut self, artifacts: Vec<String>) -> Self {
        self.training_data_required = Some(artifacts);
        self
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn training_instance_type(&self) -> &[String] {
        &self.training_instance_type
    }

    pub fn training_data_required(&self) -> Option<&[String]> {
        self.training_data_required.as_deref()
    }

    pub fn inference_instance_type(&self) -> &[String] {
        &self.inference_instance_type
    }

    pub fn training_max_run_hours(&self) -> u32 {
        self.training_max_run_hours
    }

    pub fn training_volume_size_gb(&self) -> u32 {
        self.training_volume_size_gb
    }

    pub fn inference_parameters(&self) -> &[InferenceParameters] {
        &self.inference_parameters
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.region_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_definition() -> Value {
        json!({
            "name": "resnet50",
            "region_name": "us-east-1",
            "training_instance_type": ["ml.p3.2xlarge"],
            "inference_instance_type": ["ml.m5.large"],
            "training_max_run_hours": 24,
            "training_volume_size_gb": 100,
            "inference_parameters": [{ "key": "v" }],
        })
    }

    #[test]
    fn test_from_value_complete() {
        let algorithm = Algorithm::from_value(&complete_definition()).unwrap();

        assert_eq!(algorithm.name(), "resnet50");
        assert_eq!(algorithm.region_name(), "us-east-1");
        assert_eq!(algorithm.training_instance_type(), ["ml.p3.2xlarge"]);
        assert_eq!(algorithm.inference_instance_type(), ["ml.m5.large"]);
        assert_eq!(algorithm.training_max_run_hours(), 24);
        assert_eq!(algorithm.training_volume_size_gb(), 100);
        assert_eq!(algorithm.inference_parameters().len(), 1);
        assert_eq!(
            algorithm.inference_parameters()[0].get("key"),
            Some(&json!("v"))
        );

        // Optional fields read back as absent
        assert_eq!(algorithm.arn(), None);
        assert_eq!(algorithm.account_id(), None);
        assert_eq!(algorithm.training_data_required(), None);
    }

    #[test]
    fn test_from_value_with_optional_fields() {
        let mut definition = complete_definition();
        let fields = definition.as_object_mut().unwrap();
        fields.insert("arn".into(), json!("arn:aws:sagemaker:us-east-1:123456789012:algorithm/resnet50"));
        fields.insert("account_id".into(), json!("123456789012"));
        fields.insert("training_data_required".into(), json!(["imagenet/train", "imagenet/val"]));

        let algorithm = Algorithm::from_value(&definition).unwrap();

        assert_eq!(
            algorithm.arn(),
            Some("arn:aws:sagemaker:us-east-1:123456789012:algorithm/resnet50")
        );
        assert_eq!(algorithm.account_id(), Some("123456789012"));
        assert_eq!(
            algorithm.training_data_required(),
            Some(&["imagenet/train".to_string(), "imagenet/val".to_string()][..])
        );
    }

    #[test]
    fn test_missing_required_field() {
        let required = [
            "name",
            "region_name",
            "training_instance_type",
            "inference_instance_type",
            "training_max_run_hours",
            "training_volume_size_gb",
            "inference_parameters",
        ];

        for field in required {
            let mut definition = complete_definition();
            definition.as_object_mut().unwrap().remove(field);

            let result = Algorithm::from_value(&definition);
            assert_eq!(
                result,
                Err(ValidationError::MissingField { field }),
                "expected MissingField for '{}'",
                field
            );
        }
    }

    #[test]
    fn test_type_mismatch() {
        let mut definition = complete_definition();
        definition
            .as_object_mut()
            .unwrap()
            .insert("training_max_run_hours".into(), json!("twenty-four"));

        assert_eq!(
            Algorithm::from_value(&definition),
            Err(ValidationError::TypeMismatch {
                field: "training_max_run_hours",
                expected: "integer",
                actual: "string",
            })
        );
    }

    #[test]
    fn test_non_object_input() {
        assert!(matches!(
            Algorithm::from_value(&json!(["not", "a", "mapping"])),
            Err(ValidationError::TypeMismatch {
                field: "algorithm",
                expected: "object",
                actual: "array",
            })
        ));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut definition = complete_definition();
        definition
            .as_object_mut()
            .unwrap()
            .insert("comment".into(), json!("left over from a previous schema"));

        let algorithm = Algorithm::from_value(&definition).unwrap();
        assert_eq!(algorithm.name(), "resnet50");
    }

    #[test]
    fn test_empty_list_is_distinct_from_absent() {
        let mut definition = complete_definition();
        definition
            .as_object_mut()
            .unwrap()
            .insert("training_data_required".into(), json!([]));

        let algorithm = Algorithm::from_value(&definition).unwrap();
        assert_eq!(algorithm.training_data_required(), Some(&[][..]));
    }

    #[test]
    fn test_typed_constructor_and_builders() {
        let algorithm = Algorithm::new(
            "alphafold2",
            "eu-west-1",
            vec!["ml.p4d.24xlarge".to_string()],
            vec!["ml.g5.xlarge".to_string()],
            72,
            500,
            vec![],
        )
        .with_arn("arn:aws:sagemaker:eu-west-1:123456789012:algorithm/alphafold2")
        .with_account_id("123456789012")
        .with_training_data_required(vec!["pdb/sequences".to_string()]);

        assert_eq!(algorithm.name(), "alphafold2");
        assert_eq!(algorithm.account_id(), Some("123456789012"));
        assert_eq!(
            algorithm.training_data_required(),
            Some(&["pdb/sequences".to_string()][..])
        );
        assert_eq!(algorithm.to_string(), "alphafold2 (eu-west-1)");
    }

    #[test]
    fn test_serde_round_trip_skips_absent_fields() {
        let algorithm = Algorithm::from_value(&complete_definition()).unwrap();
        let serialized = serde_json::to_value(&algorithm).unwrap();

        assert!(serialized.get("arn").is_none());
        assert!(serialized.get("account_id").is_none());

        let restored: Algorithm = serde_json::from_value(serialized).unwrap();
        assert_eq!(restored, algorithm);
    }
}
