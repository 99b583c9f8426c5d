//! Built-in dbt source template.

/// Name the built-in template is registered under.
pub(crate) const DEFAULT_TEMPLATE_NAME: &str = "format";

pub(crate) const DEFAULT_TEMPLATE: &str = r#"---
version: 2

sources:
  - name: {{ dataset }}
    database: {{ project }}
    tables:
      # dbt source ID: source("{{ dataset }}", "{{ project_normalized }}__{{ dataset }}__{{ table }}")
      - name: {{ project_normalized }}__{{ dataset }}__{{ table }}
        identifier: {{ dataset }}

        loaded_at_field: CreatedAt
        freshness:
          warn_after:
            count: 24
            period: hour  # minute | hour | day
          error_after:
            count: 36
            period: hour  # minute | hour | day

        description: |-
          {{ description | nindent(n=10) | trim }}

        tags: []

        meta: {}

        columns:
          {%- for column in columns %}
          - name: {{ column.name }}
            description: {{ column.description }}
            data_type: {{ column.data_type }}
          {%- endfor %}
"#;
