use super::catalog::{Selections, CATALOG};

/// Fixed instruction preamble sent ahead of the user's selections. The
/// documentation-related instructions are conditional in wording only; the
/// preamble itself never varies.
const PREAMBLE: &str = r#"You are an expert Ansible automation engineer. Your task is to generate a comprehensive and well-structured set of Ansible playbooks for a homelab environment based on the user's selections.

**Requirements:**
- The output must be valid YAML.
- Structure the project with roles for modularity and reusability.
- Ensure all operations are idempotent.
- Follow Ansible best practices, including using handlers for service restarts and supporting check mode.
- Use variables for configuration to make playbooks flexible.
- For secrets, show placeholders for Ansible Vault integration (e.g., {{ vault_my_secret }}).
- Provide the content for a main `site.yml` playbook and the key files for the requested roles (e.g., `roles/common/tasks/main.yml`).
- If documentation is requested, generate a comprehensive README.md file in Markdown format. This README must include detailed explanations for each selected component, covering variables, dependencies, clear execution instructions with examples, and a detailed 'Troubleshooting' section. This section must address common issues for the selected services (e.g., Docker permission errors, Kubernetes networking, firewall port conflicts, reverse proxy configuration issues) and provide specific commands and steps to diagnose and resolve them.
- If 'Check mode (dry-run) support' is selected, the execution instructions in the README.md must explicitly demonstrate how to run the playbook with the `--check` flag for a dry run.
- If 'Custom Variables File' is selected, modify the main playbook (`site.yml`) to include a `vars_files` section pointing to a placeholder path like `vars/custom_vars.yml`. Also, mention in the README.md how to create and use this file for overriding default variables.

Based on the selections below, generate the necessary Ansible playbook content. Present the output as a single block of text, using YAML comments (---) to separate different files (e.g., site.yml, roles/common/tasks/main.yml, README.md).

**User Selections:**
"#;

/// Render the current selections into the instruction text for the
/// generative service.
///
/// Pure and deterministic: iteration follows the declared catalog order, so
/// equal selections always produce byte-identical output. Categories with no
/// selected option emit nothing; all-false selections yield the preamble
/// alone (the submit guard prevents that case from reaching the network).
pub fn build_prompt(selections: &Selections) -> String {
    let mut prompt = String::from(PREAMBLE);

    for category in CATALOG {
        let selected: Vec<&str> = category
            .options
            .iter()
            .map(|option| option.label)
            .filter(|label| selections.is_selected(category.key, label))
            .collect();

        if selected.is_empty() {
            continue;
        }

        prompt.push_str(&format!("\n**{}:**\n", category.title));
        for label in selected {
            prompt.push_str(&format!("- {}\n", label));
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_false_yields_preamble_alone() {
        let selections = Selections::for_catalog();
        assert_eq!(build_prompt(&selections), PREAMBLE);
    }

    #[test]
    fn test_sections_list_only_selected_labels() {
        let mut selections = Selections::for_catalog();
        selections.set(
            "base_config",
            "Common role (updates, packages, SSH hardening)",
            true,
        );
        selections.set("service_playbooks", "Docker installation and configuration", true);

        let prompt = build_prompt(&selections);
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains("\n**Base Configuration:**\n- Common role (updates, packages, SSH hardening)\n"));
        assert!(prompt.contains("\n**Service Playbooks:**\n- Docker installation and configuration\n"));
        // Untouched categories emit no header.
        assert!(!prompt.contains("**Application Deployments:**"));
        assert!(!prompt.contains("**Testing:**"));
        // Unselected labels never leak into a section.
        assert!(!prompt.contains("User management"));
    }

    #[test]
    fn test_labels_follow_catalog_order() {
        let mut selections = Selections::for_catalog();
        // Set in reverse of catalog order; output must still follow the catalog.
        selections.set("base_config", "SSH key management", true);
        selections.set("base_config", "User management", true);

        let prompt = build_prompt(&selections);
        let user = prompt.find("- User management").unwrap();
        let ssh = prompt.find("- SSH key management").unwrap();
        assert!(user < ssh);
    }

    #[test]
    fn test_deterministic() {
        let mut selections = Selections::for_catalog();
        selections.set("documentation", "Playbook reference (README)", true);
        selections.set("automation_features", "Idempotent operations", true);
        let a = build_prompt(&selections);
        let b = build_prompt(&selections.clone());
        assert_eq!(a, b);
    }
}
